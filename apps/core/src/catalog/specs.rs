//! Spec display support: the fixed label/explanation table for known spec
//! keys, drivetrain decoration, and the display filtering rules.

use crate::models::car::{SpecMap, SpecValue, IS_ELECTRIC_KEY};

/// Display metadata for a known spec key.
pub struct SpecLabel {
    pub key: &'static str,
    pub label: &'static str,
    /// Short tooltip shown next to the label.
    pub explanation: &'static str,
}

/// The known-key table. Free-form keys outside this table fall back to
/// [`humanize_key`].
pub const SPEC_LABELS: &[SpecLabel] = &[
    SpecLabel {
        key: "transmissionType",
        label: "Transmisión",
        explanation: "Tipo de caja de cambios del vehículo",
    },
    SpecLabel {
        key: "transmission",
        label: "Detalle de Transmisión",
        explanation: "Detalle del fabricante sobre la caja de cambios",
    },
    SpecLabel {
        key: "engine",
        label: "Motor",
        explanation: "Cilindrada y configuración del motor o propulsión",
    },
    SpecLabel {
        key: "horsepower",
        label: "Caballos de Fuerza",
        explanation: "Potencia máxima declarada",
    },
    SpecLabel {
        key: "torque",
        label: "Torque",
        explanation: "Par motor máximo",
    },
    SpecLabel {
        key: "drivetrain",
        label: "Tracción",
        explanation: "Ruedas a las que llega la potencia",
    },
    SpecLabel {
        key: "fuelType",
        label: "Combustible",
        explanation: "Tipo de combustible que usa el motor",
    },
    SpecLabel {
        key: "fuelEconomy",
        label: "Consumo / Eficiencia",
        explanation: "Consumo declarado en uso mixto",
    },
    SpecLabel {
        key: "batteryRange",
        label: "Autonomía",
        explanation: "Kilómetros con una carga completa",
    },
    SpecLabel {
        key: "acceleration0to100",
        label: "Aceleración 0-100 km/h",
        explanation: "Segundos de 0 a 100 km/h",
    },
    SpecLabel {
        key: "mpg",
        label: "Consumo (MPG)",
        explanation: "Millas por galón",
    },
    SpecLabel {
        key: "seatingCapacity",
        label: "Asientos",
        explanation: "Número de asientos",
    },
    SpecLabel {
        key: "doors",
        label: "Puertas",
        explanation: "Número de puertas",
    },
    SpecLabel {
        key: "cargoCapacity",
        label: "Capacidad de Carga",
        explanation: "Volumen del maletero",
    },
    SpecLabel {
        key: "towingCapacity",
        label: "Capacidad de Remolque",
        explanation: "Peso máximo de arrastre",
    },
    SpecLabel {
        key: "topSpeed",
        label: "Velocidad Máxima",
        explanation: "Velocidad punta declarada",
    },
];

pub fn spec_label(key: &str) -> Option<&'static SpecLabel> {
    SPEC_LABELS.iter().find(|entry| entry.key == key)
}

/// Label for any spec key: the fixed table, or a humanized fallback for
/// free-form keys ("cupHolders" → "Cup Holders").
pub fn display_label(key: &str) -> String {
    if let Some(entry) = spec_label(key) {
        return entry.label.to_string();
    }
    humanize_key(key)
}

/// Splits a camelCase key on uppercase boundaries and capitalizes the
/// first letter.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

/// Appends the Spanish description to a raw drivetrain code, e.g.
/// `"FWD"` → `"FWD (Delantera)"`. Unknown codes pass through unchanged.
pub fn format_drivetrain(value: &str) -> String {
    let description = match value.to_uppercase().as_str() {
        "FWD" => Some("Delantera"),
        "RWD" => Some("Trasera"),
        "AWD" => Some("Tracción Total"),
        "4WD" | "4X4" => Some("Tracción Integral"),
        _ => None,
    };
    match description {
        Some(d) => format!("{value} ({d})"),
        None => value.to_string(),
    }
}

/// One renderable spec row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Filters and formats a spec map for display:
/// `isElectric` is a mode flag, never a row; empty values are dropped;
/// drivetrain codes get their description appended. Rows come out in the
/// map's key order (deterministic).
pub fn display_specs(specs: &SpecMap) -> Vec<SpecRow> {
    specs
        .iter()
        .filter(|(key, value)| key.as_str() != IS_ELECTRIC_KEY && !value.is_empty())
        .map(|(key, value)| {
            let raw = match value {
                SpecValue::Text(s) => s.clone(),
                SpecValue::Flag(b) => b.to_string(),
            };
            let value = if key == "drivetrain" {
                format_drivetrain(&raw)
            } else {
                raw
            };
            SpecRow {
                key: key.clone(),
                label: display_label(key),
                value,
            }
        })
        .collect()
}

/// The spec key whose row the fuel section shows: electric cars expose
/// range, combustion cars expose fuel type.
pub fn fuel_section_key(specs: &SpecMap) -> &'static str {
    let electric = specs
        .get(IS_ELECTRIC_KEY)
        .and_then(SpecValue::as_flag)
        .unwrap_or(false);
    if electric {
        "batteryRange"
    } else {
        "fuelType"
    }
}

/// Flips the electric mode flag. Turning it on also forces
/// `fuelType = "Eléctrico"`, matching the capture form.
pub fn set_electric(specs: &mut SpecMap, electric: bool) {
    specs.insert(IS_ELECTRIC_KEY.to_string(), SpecValue::Flag(electric));
    if electric {
        specs.insert("fuelType".to_string(), SpecValue::Text("Eléctrico".to_string()));
    }
}

/// The spec keys the capture form starts with, all blank.
pub fn empty_spec_form() -> SpecMap {
    let mut specs = SpecMap::new();
    for key in [
        "engine",
        "horsepower",
        "transmission",
        "transmissionType",
        "fuelEconomy",
        "drivetrain",
        "fuelType",
        "batteryRange",
        "acceleration0to100",
    ] {
        specs.insert(key.to_string(), SpecValue::Text(String::new()));
    }
    specs.insert(IS_ELECTRIC_KEY.to_string(), SpecValue::Flag(false));
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_uses_table_then_fallback() {
        assert_eq!(display_label("fuelEconomy"), "Consumo / Eficiencia");
        assert_eq!(display_label("cupHolders"), "Cup Holders");
    }

    #[test]
    fn test_format_drivetrain_known_and_unknown() {
        assert_eq!(format_drivetrain("FWD"), "FWD (Delantera)");
        assert_eq!(format_drivetrain("4x4"), "4x4 (Tracción Integral)");
        assert_eq!(format_drivetrain("6x6"), "6x6");
    }

    #[test]
    fn test_display_specs_filters_flag_and_empties() {
        let mut specs = empty_spec_form();
        specs.insert("engine".into(), "2.5L 4-Cilindros".into());
        specs.insert("drivetrain".into(), "AWD".into());

        let rows = display_specs(&specs);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.key != IS_ELECTRIC_KEY));
        let drivetrain = rows.iter().find(|r| r.key == "drivetrain").unwrap();
        assert_eq!(drivetrain.value, "AWD (Tracción Total)");
        assert_eq!(drivetrain.label, "Tracción");
    }

    #[test]
    fn test_fuel_section_key_follows_electric_flag() {
        let mut specs = empty_spec_form();
        assert_eq!(fuel_section_key(&specs), "fuelType");
        set_electric(&mut specs, true);
        assert_eq!(fuel_section_key(&specs), "batteryRange");
        assert_eq!(specs.get("fuelType").unwrap().as_text(), Some("Eléctrico"));
    }
}
