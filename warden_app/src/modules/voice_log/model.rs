use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

/// Per-guild settings, written by an external management surface.
///
/// This app only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildSettings {
    pub _id: ObjectId,
    pub guild: i64,
    /// The channel that receives voice activity logs.
    #[serde(default)]
    pub log_channel: Option<i64>,
}

fn name(name: &str) -> IndexOptions {
    IndexOptions::builder().name(name.to_owned()).build()
}

impl GuildSettings {
    pub fn collection(db: &Database) -> Collection<Self> {
        db.collection("guild.settings")
    }

    pub fn indices() -> impl IntoIterator<Item = IndexModel> {
        [IndexModel::builder()
            .options(name("guild"))
            .keys(doc! {
                "guild": 1,
            })
            .build()]
    }
}
