use crate::domain::object_id::ObjectId;

/// A review referenced by listings. Reviews are owned elsewhere; this
/// service only creates them for attachment and removes them on cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ObjectId,
    pub comment: String,
    pub rating: u8,
    pub created_at: i64,
}
