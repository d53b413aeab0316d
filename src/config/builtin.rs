//! Built-in profiles.
//!
//! `local` targets a game server on the loopback interface and speaks the
//! numeric `ID` + `data` protocol. `feeds` targets a feed aggregator that
//! speaks the `command` string protocol.

use super::templates::TemplateSet;
use super::Profile;

pub const LOCAL_PROFILE: &str = "local";
pub const FEEDS_PROFILE: &str = "feeds";

const HANDSHAKE: &str = r#"{
  "ID":0,
  "data":{
    "name":"Janusz",
    "secret":"abc"
  }
}"#;

const RESPAWN: &str = r#"{
  "ID":8,
  "data":{}
}"#;

const SPLIT: &str = r#"{
  "ID":5,
  "data":{
    "direction":[0,1]
  }
}"#;

const UPDATE: &str = r#"{
  "ID":4,
  "data":{
    "dots":[
      {
        "id":0,
        "pos":[0,1],
        "dir":[0,10]
      }
    ]
  }
}"#;

const FETCH: &str = r#"{
  "command":"fetch",
  "flat":false,
  "feeds":[".*"]
}"#;

const LIST: &str = r#"{
  "command":"list"
}"#;

const ADD: &str = r##"{
  "command":"add",
  "feedName":"example-rss",
  "entry":{
    "provider":"rss",
    "providerData":{
      "url":"https://example.com/feed.xml"
    },
    "color":"#ff8800"
  }
}"##;

const REMOVE: &str = r#"{
  "command":"remove",
  "feedName":"example-rss"
}"#;

/// Game server on localhost, short truncation, composer cleared after send.
pub fn local_profile() -> Profile {
    Profile {
        name: LOCAL_PROFILE.to_string(),
        url: "ws://127.0.0.1:9039".to_string(),
        truncate_at: 50,
        clear_on_send: true,
        templates: TemplateSet::from_pairs([
            ("handshake", HANDSHAKE),
            ("respawn", RESPAWN),
            ("split", SPLIT),
            ("update", UPDATE),
        ]),
    }
}

/// Remote feed aggregator, long truncation, composer kept after send.
pub fn feeds_profile() -> Profile {
    Profile {
        name: FEEDS_PROFILE.to_string(),
        url: "ws://feeds.lan:9039".to_string(),
        truncate_at: 500,
        clear_on_send: false,
        templates: TemplateSet::from_pairs([
            ("fetch", FETCH),
            ("list", LIST),
            ("add", ADD),
            ("remove", REMOVE),
        ]),
    }
}

pub fn builtin_profiles() -> Vec<Profile> {
    vec![local_profile(), feeds_profile()]
}
