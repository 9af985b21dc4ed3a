//! The sidebar route table.

/// One console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Computers,
    Devices,
    Users,
    Policies,
    Violations,
    Alerts,
    Logs,
    Transfers,
}

/// One sidebar entry: the route, its label, and the key that opens it.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub key: char,
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: &'static [NavEntry],
}

const fn entry(route: Route, label: &'static str, key: char) -> NavEntry {
    NavEntry { route, label, key }
}

pub const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Overview",
        entries: &[entry(Route::Dashboard, "Dashboard", '1')],
    },
    NavSection {
        title: "Device Control",
        entries: &[
            entry(Route::Computers, "Computers", '2'),
            entry(Route::Devices, "Devices", '3'),
            entry(Route::Users, "Users", '4'),
        ],
    },
    NavSection {
        title: "Policies",
        entries: &[
            entry(Route::Policies, "Policies", '5'),
            entry(Route::Violations, "Violations", '6'),
        ],
    },
    NavSection {
        title: "Monitoring",
        entries: &[
            entry(Route::Alerts, "Alerts", '7'),
            entry(Route::Logs, "System Logs", '8'),
            entry(Route::Transfers, "File Transfers", '9'),
        ],
    },
];

/// Resolve a pressed key to its route.
pub fn route_for_key(key: char) -> Option<Route> {
    SECTIONS
        .iter()
        .flat_map(|s| s.entries.iter())
        .find(|e| e.key == key)
        .map(|e| e.route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_a_unique_key() {
        let keys: Vec<char> = SECTIONS
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.key))
            .collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn keys_resolve_to_their_routes() {
        assert_eq!(route_for_key('1'), Some(Route::Dashboard));
        assert_eq!(route_for_key('6'), Some(Route::Violations));
        assert_eq!(route_for_key('0'), None);
    }
}
