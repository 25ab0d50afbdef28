pub mod siyuan_client;

pub use siyuan_client::{NoteApi, SiyuanClient};
