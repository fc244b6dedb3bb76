use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::LazyLock;
use usbwatch::diff::diff;
use usbwatch::parser;
use usbwatch::types::Snapshot;

/// Large device manager listing; a busy Windows host lists several hundred present devices
fn bench_listing(devices: usize, offset: usize) -> Snapshot {
    let mut lines = vec![
        "Status     Class           FriendlyName      InstanceId".to_string(),
        "------     -----           ------------      ----------".to_string(),
    ];
    lines.extend((offset..offset + devices).map(|i| {
        format!(
            "OK         USB             Device{:04}        USB\\VID_{:04X}&PID_{:04X}\\{}",
            i, i, i, i
        )
    }));
    parser::parse(&lines, usbwatch::platform::Platform::DeviceManager)
}

static PREVIOUS: LazyLock<Snapshot> = LazyLock::new(|| bench_listing(500, 0));
static CURRENT: LazyLock<Snapshot> = LazyLock::new(|| bench_listing(500, 5));

pub fn diff_snapshots(c: &mut Criterion) {
    c.bench_function("diff_unchanged", |b| {
        b.iter(|| {
            let result = diff(&PREVIOUS, &PREVIOUS);
            black_box(result);
        });
    });
    c.bench_function("diff_changed", |b| {
        b.iter(|| {
            let result = diff(&PREVIOUS, &CURRENT);
            black_box(result);
        });
    });
}

criterion_group!(single_benches, diff_snapshots);
criterion_main!(single_benches);
