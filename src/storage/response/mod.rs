mod file_response;
mod upload_file_response;

pub use file_response::FileResponse;
pub use upload_file_response::CommitResponse;
pub use upload_file_response::UploadFileResponse;
