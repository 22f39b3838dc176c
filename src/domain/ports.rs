use crate::domain::model::{Shape, ShapeLimits};

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn workers(&self) -> usize;
    fn limits(&self, shape: Shape) -> ShapeLimits;
}
