use crate::core::{rasterize_circle, rasterize_dome};
use crate::domain::model::{RasterRequest, Shape, ShapeLimits};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use serde::Serialize;
use url::Url;

const INDEX_PAGE: &str = include_str!("../../templates/index.html");
const DOME_PAGE: &str = include_str!("../../templates/dome.html");

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body: body.to_string(),
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status: 200,
                content_type: JSON,
                body,
            },
            Err(e) => {
                tracing::error!("❌ Failed to serialize response: {}", e);
                Self::error(500, "failed to encode result")
            }
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

/// Maps a request line onto a rasterizer call. Holds only immutable limits,
/// so one instance is shared by every worker.
#[derive(Debug, Clone)]
pub struct Router {
    circle: ShapeLimits,
    dome: ShapeLimits,
}

impl Router {
    pub fn new(circle: ShapeLimits, dome: ShapeLimits) -> Self {
        Self { circle, dome }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.limits(Shape::Circle), config.limits(Shape::Dome))
    }

    pub fn limits(&self, shape: Shape) -> ShapeLimits {
        match shape {
            Shape::Circle => self.circle,
            Shape::Dome => self.dome,
        }
    }

    pub fn handle(&self, method: &str, raw_url: &str) -> ApiResponse {
        let target = match parse_target(raw_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Rejected request target {:?}: {}", raw_url, e);
                return ApiResponse::error(400, "invalid request target");
            }
        };

        let path = target.path();
        let known = matches!(path, "/" | "/dome" | "/api/circle" | "/api/dome");
        if !known {
            return ApiResponse::error(404, "not found");
        }
        let head = method.eq_ignore_ascii_case("HEAD");
        if !head && !method.eq_ignore_ascii_case("GET") {
            return ApiResponse::error(405, "method not allowed");
        }

        let mut response = match path {
            "/" => ApiResponse::html(INDEX_PAGE),
            "/dome" => ApiResponse::html(DOME_PAGE),
            "/api/circle" => {
                let req = self.request(Shape::Circle, &target);
                ApiResponse::json(&rasterize_circle(req.radius, req.filled, req.thickness))
            }
            _ => {
                let req = self.request(Shape::Dome, &target);
                ApiResponse::json(&rasterize_dome(req.radius, req.filled, req.thickness))
            }
        };

        // HEAD answers like GET without a body
        if head {
            response.body.clear();
        }
        response
    }

    /// Reads `radius`, `filled` and `thickness` from the query string.
    /// Missing or malformed numbers fall back to the shape's defaults.
    pub fn request(&self, shape: Shape, target: &Url) -> RasterRequest {
        let radius = parse_int(query_value(target, "radius"));
        let thickness = parse_int(query_value(target, "thickness"));
        let filled = parse_flag(query_value(target, "filled"));

        self.limits(shape).clamp(radius, thickness, filled)
    }
}

fn parse_target(raw_url: &str) -> Result<Url> {
    let base = Url::parse("http://localhost")?;
    Ok(base.join(raw_url)?)
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Integers too large for `i64` saturate so that clamping still applies.
fn parse_int(value: Option<String>) -> Option<i64> {
    let value = value?;
    let v = value.trim();
    if let Ok(n) = v.parse() {
        return Some(n);
    }

    let digits = v.strip_prefix(&['+', '-'][..]).unwrap_or(v);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if v.starts_with('-') { i64::MIN } else { i64::MAX })
}

fn parse_flag(value: Option<String>) -> bool {
    value
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}
