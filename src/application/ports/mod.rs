mod admission_control;
mod file_loader;
mod model_gateway;

pub use admission_control::{AdmissionControl, Operation};
pub use file_loader::{FileLoader, FileLoaderError};
pub use model_gateway::{ModelGateway, ModelGatewayError};
