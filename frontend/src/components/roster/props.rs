use common::config::RosterConfig;
use yew::prelude::*;

/// Properties for the `RosterComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    /// Storage key and export file prefix. Read once when the component is
    /// created; later changes are ignored.
    #[prop_or_default]
    pub config: RosterConfig,
}
