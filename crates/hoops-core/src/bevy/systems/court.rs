//! Court loading systems.
//!
//! Spawns court layout entities into the ECS world.

use bevy::prelude::*;

use crate::bevy::{Court, CourtElementMarker, CourtLoadedEvent, LoadCourtEvent};

/// System to handle court loading requests.
pub fn handle_load_court(
    mut commands: Commands,
    mut events: MessageReader<LoadCourtEvent>,
    mut loaded: MessageWriter<CourtLoadedEvent>,
    existing: Query<Entity, With<CourtElementMarker>>,
) {
    for event in events.read() {
        // Clear the previous layout
        for entity in existing.iter() {
            commands.entity(entity).despawn();
        }

        for element in &event.config.elements {
            let center = element.shape.center();
            commands.spawn((
                CourtElementMarker {
                    element_id: element.id.clone(),
                    role: element.role,
                },
                Transform::from_translation(Vec3::new(center[0], center[1], 0.0)),
                Visibility::default(),
            ));
        }

        commands.insert_resource(Court(event.config.clone()));

        tracing::info!(
            court = %event.config.meta.name,
            elements = event.config.elements.len(),
            "court loaded"
        );
        loaded.write(CourtLoadedEvent {
            court_name: event.config.meta.name.clone(),
        });
    }
}
