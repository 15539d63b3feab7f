use glance_core::{DiskUsage, GlanceError, Result};
use sysinfo::Disk;

/// Filesystem types that have no backing storage.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "autofs",
    "binfmt_misc",
    "bpf",
    "cgroup",
    "cgroup2",
    "configfs",
    "debugfs",
    "devpts",
    "devtmpfs",
    "efivarfs",
    "fusectl",
    "hugetlbfs",
    "mqueue",
    "nsfs",
    "overlay",
    "proc",
    "pstore",
    "ramfs",
    "securityfs",
    "squashfs",
    "sysfs",
    "tmpfs",
    "tracefs",
];

/// `true` for virtual filesystems such as `tmpfs` or `proc`.
pub fn is_pseudo_filesystem(fs_type: &str) -> bool {
    PSEUDO_FILESYSTEMS.contains(&fs_type.to_ascii_lowercase().as_str())
}

/// Mount point of `disk` as a display string.
pub fn mount_of(disk: &Disk) -> String {
    disk.mount_point().to_string_lossy().into_owned()
}

/// Whether `disk` belongs in a listing.
pub fn is_listed(disk: &Disk, include_pseudo: bool) -> bool {
    include_pseudo || !is_pseudo_filesystem(&disk.file_system().to_string_lossy())
}

/// Capacity figures for `disk`.  A partition reporting no capacity is
/// treated as inaccessible.
pub fn usage_of(disk: &Disk) -> Result<DiskUsage> {
    usage_from_space(&mount_of(disk), disk.total_space(), disk.available_space())
}

fn usage_from_space(mount: &str, total: u64, available: u64) -> Result<DiskUsage> {
    if total == 0 {
        return Err(GlanceError::provider(
            format!("disk usage for {mount}"),
            "partition reports no capacity",
        ));
    }

    let free = available.min(total);
    Ok(DiskUsage {
        total,
        used: total - free,
        free,
    })
}
