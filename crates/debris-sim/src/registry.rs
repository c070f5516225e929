//! Object registry: the live debris records plus the removal history.
//!
//! Records live as hecs entities (one component per facet of the record);
//! the registry keeps their insertion order so list views and lookups
//! behave like a flat ordered collection. Ids are not checked for
//! uniqueness: `find` and `remove` act on the first match.

use hecs::{Entity, World};

use debris_core::components::*;
use debris_core::state::DebrisRecord;
use debris_core::types::{Position, Velocity};

#[derive(Default)]
pub struct Registry {
    world: World,
    order: Vec<Entity>,
    history: Vec<DebrisRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No duplicate check.
    pub fn insert(&mut self, record: DebrisRecord) -> Entity {
        let entity = self.world.spawn((
            Debris,
            DebrisId(record.id),
            record.position,
            record.velocity,
            record.class,
            record.spin,
            record.capture,
            record.source,
        ));
        self.order.push(entity);
        entity
    }

    /// First live entity carrying `id`, scanning in insertion order.
    pub fn find(&self, id: u32) -> Option<Entity> {
        self.order.iter().copied().find(|&entity| {
            self.world
                .get::<&DebrisId>(entity)
                .is_ok_and(|debris_id| debris_id.0 == id)
        })
    }

    /// Assembled copy of the first live record carrying `id`.
    pub fn find_record(&self, id: u32) -> Option<DebrisRecord> {
        self.find(id).and_then(|entity| self.record(entity))
    }

    /// Assemble the full record for a live entity.
    pub fn record(&self, entity: Entity) -> Option<DebrisRecord> {
        let mut query = self
            .world
            .query_one::<(
                &DebrisId,
                &Position,
                &Velocity,
                &DebrisClass,
                &Spin,
                &CaptureState,
                &DebrisSource,
            )>(entity)
            .ok()?;
        let (id, position, velocity, class, spin, capture, source) = query.get()?;
        Some(DebrisRecord {
            id: id.0,
            position: *position,
            velocity: *velocity,
            class: *class,
            spin: *spin,
            capture: *capture,
            source: source.clone(),
        })
    }

    /// Remove the first live match and move it to history.
    pub fn remove(&mut self, id: u32) -> Option<DebrisRecord> {
        let entity = self.find(id)?;
        self.retire(entity)
    }

    /// Move a live entity into history.
    pub fn retire(&mut self, entity: Entity) -> Option<DebrisRecord> {
        let record = self.detach(entity)?;
        self.history.push(record.clone());
        Some(record)
    }

    /// Retire several entities, preserving registry order in the history.
    pub fn retire_all(&mut self, entities: &[Entity]) -> usize {
        let due: Vec<Entity> = self
            .order
            .iter()
            .copied()
            .filter(|entity| entities.contains(entity))
            .collect();
        due.into_iter()
            .filter_map(|entity| self.retire(entity))
            .count()
    }

    /// Drop captured records from tracking without recording them.
    pub fn discard_captured(&mut self) -> usize {
        let captured: Vec<Entity> = self
            .order
            .iter()
            .copied()
            .filter(|&entity| {
                self.world
                    .get::<&CaptureState>(entity)
                    .is_ok_and(|capture| capture.captured)
            })
            .collect();
        captured
            .into_iter()
            .filter_map(|entity| self.detach(entity))
            .count()
    }

    /// Drop every live record without recording it. History is kept.
    pub fn clear(&mut self) -> usize {
        let live = std::mem::take(&mut self.order);
        for &entity in &live {
            let _ = self.world.despawn(entity);
        }
        live.len()
    }

    /// Forget everything, including history and non-debris entities.
    pub fn reset(&mut self) {
        self.world.clear();
        self.order.clear();
        self.history.clear();
    }

    pub fn living_count(&self) -> usize {
        self.order.len()
    }

    /// Live entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    /// Live records in insertion order.
    pub fn records(&self) -> Vec<DebrisRecord> {
        self.order
            .iter()
            .filter_map(|&entity| self.record(entity))
            .collect()
    }

    /// Records removed after their capture fade completed, oldest first.
    pub fn history(&self) -> &[DebrisRecord] {
        &self.history
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn detach(&mut self, entity: Entity) -> Option<DebrisRecord> {
        let index = self.order.iter().position(|&e| e == entity)?;
        let record = self.record(entity)?;
        self.order.remove(index);
        let _ = self.world.despawn(entity);
        Some(record)
    }
}
