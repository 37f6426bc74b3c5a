//! Serpentine mixing channel: two straight legs joined by a U-turn, a
//! gentle ramp in Z, and a Bézier outlet.
//!
//! Run with `RUST_LOG=debug` to see the build steps.

use polychannel::{
    arc_xy, build_channel, cubic_bezier, reverse_order, uniformly_increase, BoundsKernel,
    ChannelOptions, Color, CubicBezier, IrKernel, Placement, PlacementSequence, Relative,
    ShapeKind, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let size = Vec3::new(1.0, 1.0, 1.0);

    // Four 5 mm steps along +X
    let mut steps = vec![Placement::cube(size, Vec3::zeros())];
    steps.extend((0..4).map(|_| Placement::cube(size, Vec3::new(5.0, 0.0, 0.0))));
    let leg: PlacementSequence<Relative> = PlacementSequence::new(steps);

    // Half turn to the second leg, 8 mm over in Y
    let turn = arc_xy(ShapeKind::Cube, size, 4.0, -90.0, 180.0, 12)?;

    // Same leg run backward, starting where the turn ends
    let back = reverse_order(&leg).with_first_position(Vec3::zeros());

    let serpentine = leg.splice(&turn).splice(&back);
    let ramped = uniformly_increase(&serpentine, Vec3::new(0.0, 0.0, 2.0))?;

    // Smooth outlet dropping 5 mm
    let outlet = CubicBezier::new(
        Vec3::zeros(),
        Vec3::new(-10.0, 0.0, -5.0),
        Vec3::new(-10.0, 0.0, 0.0),
        Vec3::new(-10.0, 0.0, 0.0),
    );
    println!("outlet length: {:.3} mm", outlet.length(200)?);
    let outlet = cubic_bezier(&outlet, ShapeKind::Sphere, size, -Vec3::x(), 16)?;

    let channel = ramped.splice(&outlet);
    let options = ChannelOptions::default().with_color(Color::rgb(0.2, 0.5, 0.9));

    let doc = build_channel(&mut IrKernel::new(), &channel, &options)?;
    println!("{}", doc.to_json()?);

    let bounds = build_channel(&mut BoundsKernel, &channel, &options)?;
    println!(
        "{} placements, {} hulls, bounds {:?} .. {:?}",
        channel.len(),
        doc.hulls().len(),
        bounds.min,
        bounds.max
    );
    Ok(())
}
