pub mod batch;
pub mod generator;
pub mod limiter;
pub mod seeder;
pub mod uploader;

pub use crate::domain::model::Person;
pub use crate::domain::ports::{ConfigProvider, DocumentStore, PersonGenerator};
pub use crate::utils::error::Result;
