//! Fixed hierarchical failure-tag taxonomy: category → subtags, each with
//! a stable integer id. The ids are wire-level contract with the backend
//! and must never be renumbered.

pub struct FaultTagDef {
    pub id: i64,
    pub name: &'static str,
}

pub struct FaultCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub tags: &'static [FaultTagDef],
}

pub const FAULT_CATEGORIES: &[FaultCategory] = &[
    FaultCategory {
        id: "motor",
        name: "Motor",
        tags: &[
            FaultTagDef { id: 1, name: "Sobrecalentamiento" },
            FaultTagDef { id: 2, name: "Fuga de Aceite" },
            FaultTagDef { id: 3, name: "Ruidos Extraños" },
            FaultTagDef { id: 9, name: "Pérdida de Potencia" },
        ],
    },
    FaultCategory {
        id: "transmision",
        name: "Transmisión",
        tags: &[
            FaultTagDef { id: 4, name: "Cambios Bruscos" },
            FaultTagDef { id: 10, name: "Deslizamiento" },
            FaultTagDef { id: 11, name: "Fuga de Líquido" },
        ],
    },
    FaultCategory {
        id: "electrico",
        name: "Eléctrico",
        tags: &[
            FaultTagDef { id: 5, name: "Batería" },
            FaultTagDef { id: 12, name: "Luces" },
            FaultTagDef { id: 13, name: "Sensores" },
            FaultTagDef { id: 14, name: "Multimedia/Pantalla" },
        ],
    },
    FaultCategory {
        id: "suspension",
        name: "Suspensión/Frenos",
        tags: &[
            FaultTagDef { id: 6, name: "Ruidos en Suspensión" },
            FaultTagDef { id: 7, name: "Desgaste Prematuro Frenos" },
            FaultTagDef { id: 15, name: "Vibraciones" },
        ],
    },
    FaultCategory {
        id: "carroceria",
        name: "Carrocería/Interior",
        tags: &[
            FaultTagDef { id: 8, name: "Pintura" },
            FaultTagDef { id: 16, name: "Ruidos Interiores" },
            FaultTagDef { id: 17, name: "Aire Acondicionado" },
        ],
    },
];

pub fn tag_name(id: i64) -> Option<&'static str> {
    FAULT_CATEGORIES
        .iter()
        .flat_map(|cat| cat.tags)
        .find(|tag| tag.id == id)
        .map(|tag| tag.name)
}

pub fn is_known_tag(id: i64) -> bool {
    tag_name(id).is_some()
}

/// The category a tag id belongs to.
pub fn category_of(id: i64) -> Option<&'static FaultCategory> {
    FAULT_CATEGORIES
        .iter()
        .find(|cat| cat.tags.iter().any(|tag| tag.id == id))
}
