use crate::domain::model::{Shape, ShapeLimits};
use crate::utils::error::{PlannerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that configured limits are ordered and stay within the built-in ceilings.
pub fn validate_limits(shape: Shape, limits: &ShapeLimits) -> Result<()> {
    let ceiling = ShapeLimits::builtin(shape);
    let field = |name: &str| format!("{}.{}", shape, name);

    validate_positive_number(&field("min_radius"), limits.min_radius, 1)?;
    validate_range(
        &field("max_radius"),
        limits.max_radius,
        limits.min_radius,
        ceiling.max_radius,
    )?;
    validate_range(
        &field("default_radius"),
        limits.default_radius,
        limits.min_radius,
        limits.max_radius,
    )?;
    validate_range(
        &field("max_thickness"),
        limits.max_thickness,
        1,
        ceiling.max_thickness,
    )?;
    validate_range(
        &field("default_thickness"),
        limits.default_thickness,
        1,
        limits.max_thickness,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.host", "127.0.0.1").is_ok());
        assert!(validate_non_empty_string("server.host", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.workers", 4usize, 1, 64).is_ok());
        assert!(validate_range("server.workers", 0usize, 1, 64).is_err());
        assert!(validate_range("server.workers", 65usize, 1, 64).is_err());
    }

    #[test]
    fn test_builtin_limits_are_valid() {
        assert!(validate_limits(Shape::Circle, &ShapeLimits::CIRCLE).is_ok());
        assert!(validate_limits(Shape::Dome, &ShapeLimits::DOME).is_ok());
    }

    #[test]
    fn test_limits_cannot_exceed_ceiling() {
        let limits = ShapeLimits {
            max_radius: 81,
            ..ShapeLimits::DOME
        };
        let err = validate_limits(Shape::Dome, &limits).unwrap_err();
        assert!(err.to_string().contains("dome.max_radius"));
    }

    #[test]
    fn test_default_must_lie_within_range() {
        let limits = ShapeLimits {
            default_radius: 50,
            max_radius: 40,
            ..ShapeLimits::CIRCLE
        };
        assert!(validate_limits(Shape::Circle, &limits).is_err());

        let limits = ShapeLimits {
            default_thickness: 0,
            ..ShapeLimits::CIRCLE
        };
        assert!(validate_limits(Shape::Circle, &limits).is_err());
    }
}
