pub use self::rigid_body_collider_bundles::{ColliderBundle, RigidBodyBundle};

mod rigid_body_collider_bundles;
