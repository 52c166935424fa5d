use convolution_surface::{
    KernelFromParams, KernelParams, PowerInverseKernel, SegmentKernel, WeightedSegment,
    get_integral_at_point,
};
use convolution_surface_utils::Point2;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=convolution_surface=trace shows every evaluation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A tapered bone: radius 2 at the origin growing to 6 at (40, 10)
    let segment = WeightedSegment::new(Point2::new(0.0, 0.0), 2.0, Point2::new(40.0, 10.0), 6.0);

    let params = KernelParams::builder().sigma(4.0).build()?;
    let kernel = PowerInverseKernel::from_params(&params)?;

    // Sample the field along a line crossing the middle of the segment
    for step in 0..=10 {
        let offset = step as f64 * 2.0;
        let p = Point2::new(20.0 - 0.25 * offset, 5.0 + offset);
        let density = kernel.evaluate(&segment, p)?;
        println!("offset {offset:>5.1}: density {density:.6e}");
    }

    // The flat entry point agrees with the structured API
    let flat = get_integral_at_point(0.0, 0.0, 2.0, 40.0, 10.0, 6.0, 20.0, 9.0, 4.0)?;
    let structured = kernel.evaluate(&segment, Point2::new(20.0, 9.0))?;
    println!("flat {flat:.6e}, structured {structured:.6e}");

    Ok(())
}
