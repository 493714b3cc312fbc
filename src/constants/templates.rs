//! Pre-defined counters offered on the "new counter" screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub target: u32,
    pub color: &'static str,
}

pub const COUNTER_TEMPLATES: [CounterTemplate; 7] = [
    CounterTemplate {
        name: "Water Glasses",
        icon: "💧",
        target: 8,
        color: "#5AC8FA",
    },
    CounterTemplate {
        name: "Steps",
        icon: "👟",
        target: 10000,
        color: "#34C759",
    },
    CounterTemplate {
        name: "Pages Read",
        icon: "📖",
        target: 50,
        color: "#FF9500",
    },
    CounterTemplate {
        name: "Workout",
        icon: "💪",
        target: 5,
        color: "#FF3B30",
    },
    CounterTemplate {
        name: "Meditation",
        icon: "🧘",
        target: 1,
        color: "#34C759",
    },
    CounterTemplate {
        name: "Tasks Done",
        icon: "✅",
        target: 10,
        color: "#007AFF",
    },
    CounterTemplate {
        name: "Calls Made",
        icon: "📞",
        target: 5,
        color: "#AF52DE",
    },
];

/// Look a template up by its display name.
pub fn find_template(name: &str) -> Option<&'static CounterTemplate> {
    COUNTER_TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}
