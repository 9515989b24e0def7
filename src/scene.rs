//! Scene: an ordered list of mesh actors.
//!
//! There is no depth buffer, so actor order is paint order: later actors
//! draw over earlier ones wherever they overlap.

use crate::mesh::Mesh;
use crate::transform::Transform;

/// A mesh placed in the world. Plain composition, no actor hierarchy.
pub struct MeshActor {
    pub transform: Transform,
    pub mesh: Mesh,
}

impl MeshActor {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            transform: Transform::new(),
            mesh,
        }
    }
}

#[derive(Default)]
pub struct Scene {
    actors: Vec<MeshActor>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, actor: MeshActor) {
        self.actors.push(actor);
    }

    pub fn actors(&self) -> &[MeshActor] {
        &self.actors
    }

    pub fn actors_mut(&mut self) -> &mut [MeshActor] {
        &mut self.actors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;

    #[test]
    fn actors_keep_insertion_order() {
        let mut scene = Scene::new();

        let mut near = MeshActor::new(Mesh::cube());
        near.transform.set_position(Vec3::FORWARD);
        let far = MeshActor::new(Mesh::cube());

        scene.push(near);
        scene.push(far);

        assert_eq!(scene.actors().len(), 2);
        assert_eq!(scene.actors()[0].transform.position(), Vec3::FORWARD);
        assert_eq!(scene.actors()[1].transform.position(), Vec3::ZERO);
    }
}
