//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a money collection.
#[derive(Clone, Copy, Debug)]
pub struct Collection;

/// Marker type describing a money disbursement.
#[derive(Clone, Copy, Debug)]
pub struct Disbursement;

/// Marker type describing a cost incurrence.
#[derive(Clone, Copy, Debug)]
pub struct Incurrence;

/// Marker type describing an entity registration.
#[derive(Clone, Copy, Debug)]
pub struct Registration;

/// Marker type describing a scheduled work.
#[derive(Clone, Copy, Debug)]
pub struct Scheduling;
