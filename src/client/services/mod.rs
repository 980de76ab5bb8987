pub mod api_client;
pub mod dispatcher;
pub mod image_loader;
