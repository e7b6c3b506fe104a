//! Shared test utilities and fixtures.

use serde::de::DeserializeOwned;

use crate::wire::Envelope;

pub(crate) const LOGIN_OK: &str = r#"{"id": 1, "result": true, "error": null}"#;

pub(crate) const LOGIN_REJECTED: &str = r#"{"id": 1, "result": false, "error": null}"#;

pub(crate) const OK_ENVELOPE: &str = r#"{"id": 2, "result": true, "error": {"code": 0, "message": ""}}"#;

pub(crate) const ERROR_ENVELOPE: &str =
    r#"{"id": 2, "result": null, "error": {"code": 4, "message": "Torrent already in session"}}"#;

pub(crate) const EMPTY_DIR_RESULT: &str = r#"{
  "id": 2,
  "result": {
    "type": "dir",
    "contents": {}
  },
  "error": null
}"#;

pub(crate) const SINGLE_FILE_RESULT: &str = r#"{
  "id": 822,
  "result": {
    "type": "dir",
    "contents": {
      "Single File.mp4": {
        "priority": 1,
        "index": 0,
        "offset": 0,
        "progress": 85.989601135254,
        "ratio": 1,
        "path": "Single File.mp4",
        "type": "file",
        "size": 465171004
      }
    }
  },
  "error": null
}"#;

pub(crate) const MULTI_FILE_RESULT: &str = r#"{
  "id": 2,
  "result": {
    "type": "dir",
    "contents": {
      "Some.Linux.Distro": {
        "priority": 1,
        "path": "Some.Linux.Distro",
        "progress": 85.989601135254,
        "progresses": [10199684.56, 0.3, 0.57],
        "ratio": 1,
        "type": "dir",
        "contents": {
          "README.txt": {
            "priority": 1,
            "index": 1,
            "offset": 1019968456,
            "progress": 1,
            "path": "Some.Linux.Distro/README.txt",
            "type": "file",
            "size": 30
          },
          "Distribution.iso": {
            "priority": 1,
            "index": 0,
            "offset": 0,
            "progress": 1,
            "path": "Some.Linux.Distro/Distribution.iso",
            "type": "file",
            "size": 1019968456
          },
          "distribution.nfo": {
            "priority": 1,
            "index": 2,
            "offset": 1019968486,
            "progress": 1,
            "path": "Some.Linux.Distro/distribution.nfo",
            "type": "file",
            "size": 57
          }
        },
        "size": 1019968543
      }
    }
  },
  "error": null
}"#;

pub(crate) const NESTED_DIR_RESULT: &str = r#"{
  "id": 2,
  "result": {
    "type": "dir",
    "contents": {
      "Some.Show": {
        "path": "Some.Show",
        "progress": 12.5,
        "ratio": 0.25,
        "type": "dir",
        "contents": {
          "movie.mkv": {"path": "Some.Show/movie.mkv", "type": "file", "size": 700},
          "Extras": {
            "path": "Some.Show/Extras",
            "type": "dir",
            "contents": {
              "interview.mkv": {"path": "Some.Show/Extras/interview.mkv", "type": "file"}
            }
          }
        }
      }
    }
  },
  "error": null
}"#;

pub(crate) const UI_UPDATE_RESULT: &str = r#"{
  "id": 2,
  "result": {
    "connected": true,
    "torrents": {
      "asdfgh123456": {
        "message": "OK",
        "progress": 100,
        "ratio": 4.08238410949707,
        "name": "Some.Linux.Distro"
      },
      "123456asdfgh": {
        "message": "OK",
        "progress": 3.5,
        "ratio": 0.0008267719531431794,
        "name": "Some.Video"
      }
    }
  },
  "error": null
}"#;

/// Decodes `body` as an envelope and returns its result.
pub(crate) fn result_of<R: DeserializeOwned>(body: &str) -> R {
    let envelope: Envelope<R> = serde_json::from_str(body).expect("fixture is a valid envelope");
    envelope.result.expect("fixture carries a result")
}
