//! Resource type names as the REST API spells them.

pub const CLUSTERS: &str = "clusters";
pub const XMS: &str = "xms";
pub const BRICKS: &str = "bricks";
pub const SSDS: &str = "ssds";
pub const SLOTS: &str = "slots";
pub const INFINIBAND_SWITCHES: &str = "infiniband-switches";
pub const BBUS: &str = "bbus";
pub const DAES: &str = "daes";
pub const DAE_CONTROLLERS: &str = "dae-controllers";
pub const DAE_PSUS: &str = "dae-psus";
pub const LOCAL_DISKS: &str = "local-disks";
pub const STORAGE_CONTROLLERS: &str = "storage-controllers";
pub const STORAGE_CONTROLLER_PSUS: &str = "storage-controller-psus";
pub const VOLUMES: &str = "volumes";
pub const INITIATOR_GROUPS: &str = "initiator-groups";
pub const INITIATORS: &str = "initiators";
pub const SNAPSHOTS: &str = "snapshots";
pub const SNAPSHOT_SETS: &str = "snapshot-sets";
pub const CONSISTENCY_GROUPS: &str = "consistency-groups";
pub const LUN_MAPS: &str = "lun-maps";
pub const TAGS: &str = "tags";
pub const TARGETS: &str = "targets";
pub const TARGET_GROUPS: &str = "target-groups";
