pub mod api;
pub mod error;
pub mod http;

pub use api::{RemoteApi, DEPARTMENTS_PATH, EMPLOYEES_PATH, department_path, employee_path};
pub use error::{Error, RequestError, Result, strip_quotes};
pub use http::HttpClient;
pub use reqwest::Method;
