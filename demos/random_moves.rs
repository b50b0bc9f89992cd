/// Example: random trial moves on a periodic square lattice
///
/// A walker starts at the origin of a 12x12 torus and repeatedly jumps by a
/// uniformly drawn minimum-image offset. After every jump the walker's
/// minimum-image distance and winding relative to the start are reported,
/// the same bookkeeping a lattice Monte Carlo update performs.
use periodic_lattice::lattice::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Random trial moves on a periodic lattice ===\n");

    let lattice = create_lattice("square", &[12, 12])?;
    println!("Lattice: {} {:?}", lattice.topology(), lattice.size());
    println!("Sites: {}, coordination: {}\n", lattice.num_sites(), lattice.coordination());

    let mut rng = StdRng::seed_from_u64(42);
    let start: SiteIndex = 0;
    let mut site = start;

    for step in 1..=8 {
        let jump = lattice.random_distance(&mut rng);
        let target = lattice.displaced_site(site, &jump);
        println!(
            "{step:>2}. jump {:?}: {} -> {} at {:?}",
            jump,
            site,
            target,
            lattice.coordinates(target)
        );
        println!(
            "    distance from start {:.3}, winding {:?}",
            lattice.distance(start, target),
            lattice.winding(start, target)
        );
        site = target;
    }

    println!("\nNeighbours of the final site {site}: {:?}", lattice.neighbors(site));
    Ok(())
}
