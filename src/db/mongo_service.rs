use log::info;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

#[derive(Clone)]
pub struct MongoService {
    pub(crate) collection: Collection<Document>,
}

impl MongoService {
    pub async fn new(
        uri: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, mongodb::error::Error> {
        info!("Connecting to MongoDB...");
        let client = Client::with_uri_str(uri).await?;
        // with_uri_str does not reach the deployment; the ping does.
        client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await?;
        info!("Connected to MongoDB.");
        Ok(Self {
            collection: client.database(database).collection::<Document>(collection),
        })
    }
}
