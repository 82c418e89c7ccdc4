//! Directory Adapter - 上游员工目录客户端实现

mod fake_directory_client;
mod http_directory_client;

pub use fake_directory_client::{FakeDirectoryClient, RecordedRequest};
pub use http_directory_client::*;
