// Actors and their single role.
//
// Purpose
// - Identify who is acting and which capabilities the access guard may grant them.
//
// Boundaries
// - Actors are created and removed by the identity subsystem. This module only reads them.

use crate::shared::core::primitives::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Worker,
    Manager,
    Client,
}

impl Role {
    /// Precedence applied when an identity import carries several group names.
    pub const PRECEDENCE: [Role; 3] = [Role::Worker, Role::Manager, Role::Client];

    pub fn from_group_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Worker" => Some(Role::Worker),
            "Manager" => Some(Role::Manager),
            "Client" => Some(Role::Client),
            _ => None,
        }
    }

    /// Resolves a list of group names to one role. Unknown groups are ignored.
    pub fn resolve<'a>(groups: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let found: Vec<Role> = groups.into_iter().filter_map(Role::from_group_name).collect();
        Self::PRECEDENCE
            .into_iter()
            .find(|candidate| found.contains(candidate))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Worker => "Worker",
            Role::Manager => "Manager",
            Role::Client => "Client",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub display_name: String,
    /// `None` when the identity carries no recognised group. Such actors are always denied.
    pub role: Option<Role>,
    /// Personal hourly rate, used for worker pay summaries.
    pub hourly_rate: Option<u32>,
}

impl Actor {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}
