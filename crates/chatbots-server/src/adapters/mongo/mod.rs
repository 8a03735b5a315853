//! MongoDB Repository Implementations

mod chatbot_repository;

pub use chatbot_repository::MongoChatbotRepository;

use mongodb::{Client, Database};

/// Connect to the document store and select the database
pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(database))
}
