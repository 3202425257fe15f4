// Dubins tour cost demo: poses on a jittered ring with random headings,
// pairwise cost matrix, and the cost of visiting them in ring order.

use std::f64::consts::PI;

use rand_distr::{Distribution, Normal, Uniform};

use dubins_routing::utils::{colors, PointStyle, TourStyle, Visualizer};
use dubins_routing::{build_cost_matrix, tour_cost, Configuration, InfeasibleEdge, Point2D};

fn main() {
    let turn_radius = 2.0;
    let n = 8;

    let mut rng = rand::thread_rng();
    let radius_noise = Normal::new(0.0, 1.5).unwrap();
    let heading_dist = Uniform::new(0.0, 2.0 * PI);

    let mut points = Vec::with_capacity(n);
    let mut headings = Vec::with_capacity(n);
    for k in 0..n {
        let angle = 2.0 * PI * k as f64 / n as f64;
        let ring_radius = 20.0 + radius_noise.sample(&mut rng);
        points.push(Point2D::new(
            ring_radius * angle.cos(),
            ring_radius * angle.sin(),
        ));
        headings.push(heading_dist.sample(&mut rng));
    }

    let matrix = build_cost_matrix(&points, &headings, turn_radius, InfeasibleEdge::Sentinel)
        .unwrap();
    println!("pairwise Dubins cost matrix ({} nodes, r = {}):", n, turn_radius);
    for i in 0..matrix.len() {
        let row: Vec<String> = (0..matrix.len())
            .map(|j| format!("{:10.2}", matrix.cost(i, j)))
            .collect();
        println!("  {}", row.join(" "));
    }

    let tour: Vec<usize> = (0..n).collect();
    match tour_cost(&tour, &points, &headings, turn_radius, true) {
        Ok(cost) => println!("closed ring tour cost: {:.3}", cost),
        Err(err) => eprintln!("tour cost failed: {}", err),
    }

    let configurations: Vec<_> = points
        .iter()
        .zip(headings.iter())
        .map(|(p, &h)| Configuration::new(p.x, p.y, h))
        .collect();

    let mut vis = Visualizer::new();
    vis.set_title("Dubins tour");
    vis.plot_tour(&tour, &points, true, &TourStyle::default());
    vis.plot_configurations(&configurations, 3.0);
    vis.plot_point(points[0], &PointStyle::new(colors::START, "First node").with_size(1.5));
    if let Err(err) = vis.save_svg("./img/dubins_tour.svg") {
        eprintln!("failed to save figure: {}", err);
    }
}
