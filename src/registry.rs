//! Entity registry: the single owner of every live non-player entity.
//!
//! Entities are stored in one [`SlotMap`] keyed by [`EntityId`].  Keys are
//! generational, so an id that has been despawned never aliases a later
//! entity; lookups with a stale id simply return `None`.  Destroying an
//! entity is one `despawn` call: there are no secondary group lists to keep
//! in sync.
//!
//! Typed access goes through [`ActorKind`], implemented for each entity type,
//! so callers write `registry.iter::<Asteroid>()` rather than matching on
//! [`Actor`] by hand.

use crate::asteroid::Asteroid;
use crate::meteorite::Meteorite;
use crate::orb::GoldOrb;
use crate::shot::Shot;
use crate::star::Star;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a live entity.
    pub struct EntityId;
}

/// Discriminant of [`Actor`], used for counting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Asteroid,
    Shot,
    GoldOrb,
    Star,
    Meteorite,
}

/// Any entity the registry can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Actor {
    Asteroid(Asteroid),
    Shot(Shot),
    GoldOrb(GoldOrb),
    Star(Star),
    Meteorite(Meteorite),
}

impl Actor {
    pub fn kind(&self) -> EntityKind {
        match self {
            Actor::Asteroid(_) => EntityKind::Asteroid,
            Actor::Shot(_) => EntityKind::Shot,
            Actor::GoldOrb(_) => EntityKind::GoldOrb,
            Actor::Star(_) => EntityKind::Star,
            Actor::Meteorite(_) => EntityKind::Meteorite,
        }
    }
}

/// Typed view into [`Actor`].
pub trait ActorKind: Sized + Into<Actor> {
    const KIND: EntityKind;

    fn as_kind(actor: &Actor) -> Option<&Self>;
    fn as_kind_mut(actor: &mut Actor) -> Option<&mut Self>;
    fn into_kind(actor: Actor) -> Result<Self, Actor>;
}

macro_rules! actor_kind {
    ($ty:ident) => {
        impl From<$ty> for Actor {
            fn from(value: $ty) -> Self {
                Actor::$ty(value)
            }
        }

        impl ActorKind for $ty {
            const KIND: EntityKind = EntityKind::$ty;

            fn as_kind(actor: &Actor) -> Option<&Self> {
                match actor {
                    Actor::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn as_kind_mut(actor: &mut Actor) -> Option<&mut Self> {
                match actor {
                    Actor::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_kind(actor: Actor) -> Result<Self, Actor> {
                match actor {
                    Actor::$ty(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

actor_kind!(Asteroid);
actor_kind!(Shot);
actor_kind!(GoldOrb);
actor_kind!(Star);
actor_kind!(Meteorite);

#[derive(Debug, Clone, Default)]
pub struct Registry {
    actors: SlotMap<EntityId, Actor>,
}

impl Registry {
    pub fn spawn(&mut self, actor: impl Into<Actor>) -> EntityId {
        self.actors.insert(actor.into())
    }

    /// Remove an entity of any kind.
    pub fn despawn(&mut self, id: EntityId) -> Option<Actor> {
        self.actors.remove(id)
    }

    /// Remove and return the entity at `id` if it is a `T`.  Entities of a
    /// different kind are left in place.
    pub fn take<T: ActorKind>(&mut self, id: EntityId) -> Option<T> {
        if self.get::<T>(id).is_none() {
            return None;
        }
        let actor = self.actors.remove(id)?;
        T::into_kind(actor).ok()
    }

    pub fn get<T: ActorKind>(&self, id: EntityId) -> Option<&T> {
        self.actors.get(id).and_then(T::as_kind)
    }

    pub fn get_mut<T: ActorKind>(&mut self, id: EntityId) -> Option<&mut T> {
        self.actors.get_mut(id).and_then(T::as_kind_mut)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actors.contains_key(id)
    }

    pub fn iter<'a, T: ActorKind + 'a>(&'a self) -> impl Iterator<Item = (EntityId, &'a T)> + 'a {
        self.actors
            .iter()
            .filter_map(|(id, actor)| T::as_kind(actor).map(|inner| (id, inner)))
    }

    pub fn iter_mut<'a, T: ActorKind + 'a>(&'a mut self) -> impl Iterator<Item = (EntityId, &'a mut T)> + 'a {
        self.actors
            .iter_mut()
            .filter_map(|(id, actor)| T::as_kind_mut(actor).map(|inner| (id, inner)))
    }

    pub fn iter_all_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Actor)> + '_ {
        self.actors.iter_mut()
    }

    pub fn iter_all(&self) -> impl Iterator<Item = (EntityId, &Actor)> + '_ {
        self.actors.iter()
    }

    /// Snapshot of the ids of every live `T`.  Safe to hold across mutation.
    pub fn ids<T: ActorKind>(&self) -> Vec<EntityId> {
        self.iter::<T>().map(|(id, _)| id).collect()
    }

    pub fn count<T: ActorKind>(&self) -> usize {
        self.iter::<T>().count()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn clear(&mut self) {
        self.actors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use bevy::math::Vec2;

    #[test]
    fn despawned_ids_never_resolve_again() {
        let mut registry = Registry::default();
        let first = registry.spawn(Asteroid::new(Vec2::ZERO, 20.0));
        assert!(registry.despawn(first).is_some());

        let second = registry.spawn(Asteroid::new(Vec2::ONE, 20.0));
        assert_ne!(first, second);
        assert!(registry.get::<Asteroid>(first).is_none());
        assert!(registry.get::<Asteroid>(second).is_some());
    }

    #[test]
    fn take_checks_the_kind() {
        let config = GameConfig::default();
        let mut registry = Registry::default();
        let id = registry.spawn(GoldOrb::at_rest(Vec2::ZERO, &config));

        assert!(registry.take::<Asteroid>(id).is_none());
        assert!(registry.contains(id), "wrong-kind take must not remove");
        assert!(registry.take::<GoldOrb>(id).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn typed_iteration_filters_by_kind() {
        let config = GameConfig::default();
        let mut registry = Registry::default();
        registry.spawn(Asteroid::new(Vec2::ZERO, 20.0));
        registry.spawn(Asteroid::new(Vec2::ONE, 40.0));
        registry.spawn(GoldOrb::at_rest(Vec2::ZERO, &config));

        assert_eq!(registry.count::<Asteroid>(), 2);
        assert_eq!(registry.count::<GoldOrb>(), 1);
        assert_eq!(registry.count::<Star>(), 0);
        assert_eq!(registry.len(), 3);
        assert!(registry
            .iter_all()
            .any(|(_, actor)| actor.kind() == EntityKind::GoldOrb));
    }
}
