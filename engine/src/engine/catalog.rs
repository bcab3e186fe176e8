// engine/src/engine/catalog.rs
#![forbid(unsafe_code)]

use serde::Deserialize;

use crate::engine::error::RoomError;
use crate::engine::footprint::Footprint;

/// A furniture kind that can be added to the room.
#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureTemplate {
    pub name: String,
    pub footprint: Footprint,
}

impl FurnitureTemplate {
    pub fn new(name: impl Into<String>, footprint: Footprint) -> Result<Self, RoomError> {
        let name = name.into();
        if !footprint.is_valid() {
            return Err(RoomError::InvalidTemplate { name, footprint });
        }
        Ok(Self { name, footprint })
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    templates: Vec<TemplateEntry>,
}

#[derive(Deserialize)]
struct TemplateEntry {
    name: String,
    width: u32,
    height: u32,
}

/// Ordered list of templates offered by "add new object".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<FurnitureTemplate>,
}

impl Catalog {
    pub fn new(templates: Vec<FurnitureTemplate>) -> Self {
        Self { templates }
    }

    /// Default template set.
    pub fn builtin() -> Self {
        let stock = [
            ("chair", 1, 1),
            ("table", 2, 2),
            ("sofa", 3, 1),
            ("bed", 2, 3),
            ("wardrobe", 2, 1),
        ];
        Self {
            templates: stock
                .into_iter()
                .map(|(name, w, h)| FurnitureTemplate {
                    name: name.to_string(),
                    footprint: Footprint::new(w, h),
                })
                .collect(),
        }
    }

    /// Parses
    ///
    /// ```toml
    /// [[templates]]
    /// name = "bed"
    /// width = 2
    /// height = 3
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, RoomError> {
        let file: CatalogFile = toml::from_str(src)?;
        let templates = file
            .templates
            .into_iter()
            .map(|e| FurnitureTemplate::new(e.name, Footprint::new(e.width, e.height)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&FurnitureTemplate> {
        self.templates.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&FurnitureTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnitureTemplate> {
        self.templates.iter()
    }
}
