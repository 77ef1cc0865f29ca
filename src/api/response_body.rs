use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub enum ResponseBody {
    Error(String),
}
