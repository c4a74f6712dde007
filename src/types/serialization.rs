use serde::ser::{ Serialize, SerializeStruct, Serializer };

use crate::error::Result;
use super::Graph;

impl Serialize for Graph {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Graph", 3)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("edge_count", &self.edge_count())?;

        // Emit the matrix as nested rows rather than ndarray's flat `{v, dim, data}` layout
        state.serialize_field("weights", &self.weight_rows())?;

        state.end()
    }
}

impl Graph {
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;

        return Ok(json);
    }
}
