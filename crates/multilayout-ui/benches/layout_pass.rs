use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multilayout_testing::{FixedBox, ScriptedDelegate};
use multilayout_ui::{Constraints, CustomMultiChildLayout, LayoutChild, Point};

const CHILD_COUNT_SAMPLES: &[usize] = &[4, 32, 256];
const VIEWPORT: Constraints = Constraints {
    min_width: 0.0,
    max_width: 1080.0,
    min_height: 0.0,
    max_height: 1920.0,
};

fn grid(children: usize) -> CustomMultiChildLayout<usize, ScriptedDelegate<usize>> {
    let delegate = ScriptedDelegate::new(children as u64, move |cx, size| {
        let columns = 4;
        let cell_width = size.width / columns as f32;
        for id in 0..children {
            let cell = cx.layout_child(&id, Constraints::loose(cell_width, size.height))?;
            let x = (id % columns) as f32 * cell_width;
            let y = (id / columns) as f32 * cell.height;
            cx.position_child(&id, Point::new(x, y))?;
        }
        Ok(())
    });
    (0..children).fold(CustomMultiChildLayout::with_delegate(delegate), |node, id| {
        node.with_child(LayoutChild::new(id, FixedBox::new(format!("cell {id}"), 200.0, 48.0)))
    })
}

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_pass");
    for &children in CHILD_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(children), &children, |b, &children| {
            let mut node = grid(children);
            b.iter(|| {
                node.mark_needs_layout();
                black_box(node.layout(black_box(VIEWPORT)).is_ok())
            });
        });
    }
    group.finish();
}

fn bench_cached_layout(c: &mut Criterion) {
    let mut node = grid(32);
    let _ = node.layout(VIEWPORT);
    c.bench_function("layout_pass/cached", |b| {
        b.iter(|| black_box(node.layout(black_box(VIEWPORT)).is_ok()))
    });
}

criterion_group!(benches, bench_layout_pass, bench_cached_layout);
criterion_main!(benches);
