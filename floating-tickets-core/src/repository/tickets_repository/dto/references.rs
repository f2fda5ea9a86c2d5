//!
//! Weak references to entities owned by other parts of the agency system.
//!
//! They are lookup keys only. Holding one does not keep the referenced
//! entity alive and the ticket never reads through it when rendering history.
//!

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityRef(pub ObjectId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteRef(pub ObjectId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirlineRef(pub ObjectId);
