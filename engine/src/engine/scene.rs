// engine/src/engine/scene.rs
#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;

use crate::engine::catalog::FurnitureTemplate;
use crate::engine::collaborators::{Affordance, ContextActions, VisualFactory};
use crate::engine::floor::FloorTransform;
use crate::engine::item::{ItemId, ItemTransform};

#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    Instantiated { id: ItemId, template: String },
    Destroyed(ItemId),
    Transform { id: ItemId, transform: ItemTransform },
    Affordance { id: ItemId, affordance: Affordance },
    Floor(FloorTransform),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub template: String,
    pub transform: Option<ItemTransform>,
    pub affordance: Affordance,
}

/// In-memory visual factory: hands out sequential ids and mirrors what a renderer would show.
#[derive(Clone, Debug)]
pub struct HeadlessScene {
    next_id: u64,
    live: FxHashMap<ItemId, VisualState>,
    floor: Option<FloorTransform>,
    events: Vec<SceneEvent>,
    log_events: bool,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: FxHashMap::default(),
            floor: None,
            events: Vec::new(),
            log_events: true,
        }
    }

    /// Same state tracking, no event log (long sessions).
    pub fn without_event_log() -> Self {
        Self {
            log_events: false,
            ..Self::new()
        }
    }

    fn record(&mut self, event: SceneEvent) {
        if self.log_events {
            self.events.push(event);
        }
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn visual(&self, id: ItemId) -> Option<&VisualState> {
        self.live.get(&id)
    }

    #[inline]
    pub fn is_live(&self, id: ItemId) -> bool {
        self.live.contains_key(&id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn floor(&self) -> Option<FloorTransform> {
        self.floor
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualFactory for HeadlessScene {
    fn instantiate(&mut self, template: &FurnitureTemplate) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            VisualState {
                template: template.name.clone(),
                transform: None,
                affordance: Affordance::HIDDEN,
            },
        );
        self.record(SceneEvent::Instantiated {
            id,
            template: template.name.clone(),
        });
        id
    }

    fn destroy(&mut self, id: ItemId) {
        self.live.remove(&id);
        self.record(SceneEvent::Destroyed(id));
    }

    fn set_transform(&mut self, id: ItemId, transform: ItemTransform) {
        if let Some(v) = self.live.get_mut(&id) {
            v.transform = Some(transform);
        }
        self.record(SceneEvent::Transform { id, transform });
    }

    fn set_selection_affordance(&mut self, id: ItemId, affordance: Affordance) {
        if let Some(v) = self.live.get_mut(&id) {
            v.affordance = affordance;
        }
        self.record(SceneEvent::Affordance { id, affordance });
    }

    fn set_floor_transform(&mut self, floor: FloorTransform) {
        self.floor = Some(floor);
        self.record(SceneEvent::Floor(floor));
    }
}

/// Records the visibility of the context action controls.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeadlessActions {
    pub visible: bool,
    pub toggles: u64,
}

impl ContextActions for HeadlessActions {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.toggles += 1;
    }
}
