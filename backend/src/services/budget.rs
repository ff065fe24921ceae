// ============================================================================
// Internal Budget Generation
// ============================================================================
//
// Maps identified scopes to cost-code line items for internal tracking.
// The cost-code catalog is a closed, hard-coded table; scope-to-category
// dispatch is keyed on scope-type substrings in a fixed priority order.

use serde::{Deserialize, Serialize};

use crate::models::{validate_scopes, Scope, ScopeError};

/// Measurement unit of a cost-code line item; drives the placeholder
/// quantity takeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Hour,
    Sqft,
    Each,
    Linft,
    Lbsum,
    Day,
    Set,
}

impl Unit {
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Hour => "hour",
            Unit::Sqft => "sqft",
            Unit::Each => "each",
            Unit::Linft => "linft",
            Unit::Lbsum => "lbsum",
            Unit::Day => "day",
            Unit::Set => "set",
        }
    }

    /// Placeholder per-scope quantity until real takeoffs are wired in.
    fn default_quantity(&self) -> f64 {
        match self {
            Unit::Hour => 40.0,
            Unit::Sqft => 100.0,
            Unit::Each => 4.0,
            Unit::Linft => 50.0,
            Unit::Lbsum => 1.0,
            Unit::Day => 10.0,
            Unit::Set => 4.0,
        }
    }
}

struct CostItem {
    code: &'static str,
    name: &'static str,
    unit: Unit,
    typical_rate: f64,
}

struct CostCategory {
    key: &'static str,
    line_items: &'static [CostItem],
}

/// Closed cost-code catalog keyed by category.
const COST_CODES: &[CostCategory] = &[
    CostCategory {
        key: "GLASS_FIRE_RATED",
        line_items: &[CostItem {
            code: "088113",
            name: "Fire-rated glazing",
            unit: Unit::Sqft,
            typical_rate: 185.0,
        }],
    },
    CostCategory {
        key: "GLASS_IGU",
        line_items: &[CostItem {
            code: "088120",
            name: "Insulated glass units",
            unit: Unit::Sqft,
            typical_rate: 65.0,
        }],
    },
    CostCategory {
        key: "GLASS_MONOLITHIC",
        line_items: &[CostItem {
            code: "088110",
            name: "Monolithic tempered glass",
            unit: Unit::Sqft,
            typical_rate: 38.0,
        }],
    },
    CostCategory {
        key: "GLASS_SPECIALTY",
        line_items: &[CostItem {
            code: "088300",
            name: "Specialty glass and mirrors",
            unit: Unit::Sqft,
            typical_rate: 42.0,
        }],
    },
    CostCategory {
        key: "METAL_WINDOWS",
        line_items: &[CostItem {
            code: "084113",
            name: "Aluminum-framed entrances and storefronts",
            unit: Unit::Linft,
            typical_rate: 95.0,
        }],
    },
    CostCategory {
        key: "HARDWARE_HINGES",
        line_items: &[CostItem {
            code: "087111",
            name: "Door hinges and pivots",
            unit: Unit::Set,
            typical_rate: 220.0,
        }],
    },
    CostCategory {
        key: "HARDWARE_LATCHING",
        line_items: &[CostItem {
            code: "087112",
            name: "Latching and locking hardware",
            unit: Unit::Set,
            typical_rate: 340.0,
        }],
    },
    CostCategory {
        key: "HARDWARE_ACCESSORIES",
        line_items: &[CostItem {
            code: "087113",
            name: "Door hardware accessories",
            unit: Unit::Each,
            typical_rate: 85.0,
        }],
    },
    CostCategory {
        key: "SEALANTS_WEATHER",
        line_items: &[CostItem {
            code: "079200",
            name: "Weather-seal joint sealants",
            unit: Unit::Linft,
            typical_rate: 6.5,
        }],
    },
    CostCategory {
        key: "SEALANTS_STRUCTURAL",
        line_items: &[CostItem {
            code: "079210",
            name: "Structural silicone glazing sealant",
            unit: Unit::Linft,
            typical_rate: 11.0,
        }],
    },
    CostCategory {
        key: "LABOR_FIELD_GLAZIERS",
        line_items: &[CostItem {
            code: "010510",
            name: "Field glazier labor",
            unit: Unit::Hour,
            typical_rate: 98.0,
        }],
    },
    CostCategory {
        key: "LABOR_DOOR_GLAZIERS",
        line_items: &[CostItem {
            code: "010520",
            name: "Door and hardware glazier labor",
            unit: Unit::Hour,
            typical_rate: 104.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_DRIVE_TIME",
        line_items: &[CostItem {
            code: "015010",
            name: "Crew drive time",
            unit: Unit::Hour,
            typical_rate: 72.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_TOOLS",
        line_items: &[CostItem {
            code: "015020",
            name: "Small tools and consumables",
            unit: Unit::Lbsum,
            typical_rate: 1_500.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_PARKING",
        line_items: &[CostItem {
            code: "015030",
            name: "Parking and site access",
            unit: Unit::Day,
            typical_rate: 45.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_SHIPPING",
        line_items: &[CostItem {
            code: "015040",
            name: "Freight and shipping",
            unit: Unit::Lbsum,
            typical_rate: 4_200.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_CRATING",
        line_items: &[CostItem {
            code: "015050",
            name: "Crating and protection",
            unit: Unit::Lbsum,
            typical_rate: 1_800.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_EQUIPMENT",
        line_items: &[CostItem {
            code: "015060",
            name: "Lifts and rigging equipment",
            unit: Unit::Day,
            typical_rate: 650.0,
        }],
    },
    CostCategory {
        key: "INDIRECT_INSURANCE",
        line_items: &[CostItem {
            code: "015070",
            name: "Project insurance",
            unit: Unit::Lbsum,
            typical_rate: 3_500.0,
        }],
    },
    CostCategory {
        key: "ACCESSORIES_SHIMS",
        line_items: &[CostItem {
            code: "088010",
            name: "Glazing shims",
            unit: Unit::Each,
            typical_rate: 2.5,
        }],
    },
    CostCategory {
        key: "ACCESSORIES_SETTING_BLOCKS",
        line_items: &[CostItem {
            code: "088020",
            name: "Setting blocks",
            unit: Unit::Each,
            typical_rate: 3.0,
        }],
    },
];

/// Per-scope indirect and accessory codes added for every scope.
const PER_SCOPE_INDIRECTS: &[&str] = &[
    "INDIRECT_DRIVE_TIME",
    "INDIRECT_TOOLS",
    "ACCESSORIES_SHIMS",
    "ACCESSORIES_SETTING_BLOCKS",
];

/// Project-wide indirect codes added exactly once per budget.
const PROJECT_INDIRECTS: &[&str] = &[
    "INDIRECT_PARKING",
    "INDIRECT_SHIPPING",
    "INDIRECT_CRATING",
    "INDIRECT_EQUIPMENT",
    "INDIRECT_INSURANCE",
];

/// One line of the internal budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    pub code: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub category: String,
    pub notes: String,
}

/// Generate the internal budget for a scope list.
///
/// Each scope contributes the cost codes of its type branch plus the
/// per-scope indirect/accessory codes; project-wide indirect codes are
/// appended once at the end.
pub fn generate_internal_budget(scopes: &[Scope]) -> Result<Vec<BudgetLine>, ScopeError> {
    validate_scopes(scopes)?;

    let mut lines = Vec::new();

    for scope in scopes {
        let scope_type = scope.scope_type.to_uppercase();

        if scope_type.contains("FIRE-RATED") {
            add_cost_code(&mut lines, "GLASS_FIRE_RATED", Some(scope));
            add_cost_code(&mut lines, "HARDWARE_LATCHING", Some(scope));
            add_cost_code(&mut lines, "LABOR_DOOR_GLAZIERS", Some(scope));
        } else if scope_type.contains("STOREFRONT") {
            add_cost_code(&mut lines, "METAL_WINDOWS", Some(scope));
            add_cost_code(&mut lines, "GLASS_IGU", Some(scope));
            add_cost_code(&mut lines, "LABOR_FIELD_GLAZIERS", Some(scope));
            add_cost_code(&mut lines, "SEALANTS_WEATHER", Some(scope));
        } else if scope_type.contains("CURTAIN WALL") {
            add_cost_code(&mut lines, "METAL_WINDOWS", Some(scope));
            add_cost_code(&mut lines, "GLASS_IGU", Some(scope));
            add_cost_code(&mut lines, "SEALANTS_STRUCTURAL", Some(scope));
            add_cost_code(&mut lines, "LABOR_FIELD_GLAZIERS", Some(scope));
        } else if scope_type.contains("MONOLITHIC") {
            add_cost_code(&mut lines, "GLASS_MONOLITHIC", Some(scope));
            add_cost_code(&mut lines, "LABOR_FIELD_GLAZIERS", Some(scope));
        } else if scope_type.contains("MIRROR") {
            add_cost_code(&mut lines, "GLASS_SPECIALTY", Some(scope));
            add_cost_code(&mut lines, "LABOR_FIELD_GLAZIERS", Some(scope));
        } else if scope_type.contains("DOOR") {
            add_cost_code(&mut lines, "HARDWARE_HINGES", Some(scope));
            add_cost_code(&mut lines, "HARDWARE_LATCHING", Some(scope));
            add_cost_code(&mut lines, "HARDWARE_ACCESSORIES", Some(scope));
            add_cost_code(&mut lines, "LABOR_DOOR_GLAZIERS", Some(scope));
        }

        for key in PER_SCOPE_INDIRECTS {
            add_cost_code(&mut lines, key, Some(scope));
        }
    }

    for key in PROJECT_INDIRECTS {
        add_cost_code(&mut lines, key, None);
    }

    Ok(lines)
}

/// Total cost across all budget lines.
pub fn budget_total(lines: &[BudgetLine]) -> f64 {
    lines.iter().map(|line| line.total_cost).sum()
}

fn add_cost_code(lines: &mut Vec<BudgetLine>, category_key: &str, scope: Option<&Scope>) {
    let Some(category) = COST_CODES.iter().find(|c| c.key == category_key) else {
        return;
    };

    for item in category.line_items {
        let quantity = match scope {
            Some(_) => item.unit.default_quantity(),
            None => 1.0,
        };

        lines.push(BudgetLine {
            code: item.code.to_string(),
            description: item.name.to_string(),
            unit: item.unit.label().to_string(),
            quantity,
            unit_cost: item.typical_rate,
            total_cost: quantity * item.typical_rate,
            category: category_key.to_string(),
            notes: scope.map_or_else(|| "Project-wide".to_string(), |s| s.description.clone()),
        });
    }
}
