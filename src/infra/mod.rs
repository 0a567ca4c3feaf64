// Concrete collaborators behind the source traits in `types`.

pub mod confluence;
pub mod http_client;
pub mod slack;

pub use confluence::ConfluenceDirectory;
pub use slack::SlackClient;
