use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seamcarve::{
    validate_seam, EnergyMatrix, Orientation, SeamCarver, SeamError, SeamFinder, BORDER_ENERGY,
};

fn random_picture(rng: &mut StdRng, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.random(), rng.random(), rng.random()])
    })
}

// Cheapest vertical seam total by the textbook row-by-row dynamic
// program, independent of the graph search.
fn cheapest_vertical_total(energy: &EnergyMatrix) -> u64 {
    let (width, height) = (energy.width(), energy.height());
    let e = |x: u32, y: u32| u64::from(energy.at(x, y).unwrap());
    let mut row: Vec<u64> = (0..width).map(|x| e(x, 0)).collect();
    for y in 1..height {
        row = (0..width)
            .map(|x| {
                let lo = x.saturating_sub(1);
                let hi = (x + 1).min(width - 1);
                e(x, y) + (lo..=hi).map(|p| row[p as usize]).min().unwrap()
            })
            .collect();
    }
    row.into_iter().min().unwrap()
}

fn vertical_total(energy: &EnergyMatrix, seam: &[u32]) -> u64 {
    seam.iter()
        .enumerate()
        .map(|(y, x)| u64::from(energy.at(*x, y as u32).unwrap()))
        .sum()
}

fn horizontal_total(energy: &EnergyMatrix, seam: &[u32]) -> u64 {
    seam.iter()
        .enumerate()
        .map(|(x, y)| u64::from(energy.at(x as u32, *y).unwrap()))
        .sum()
}

#[test]
fn vertical_seams_are_valid_and_minimal() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let (w, h) = (rng.random_range(1..12), rng.random_range(1..12));
        let carver = SeamCarver::new(&random_picture(&mut rng, w, h)).unwrap();
        let seam = carver.find_vertical_seam();
        assert_eq!(validate_seam(&seam, h as usize, w), Ok(()));
        let energy = carver.energy_matrix();
        assert_eq!(vertical_total(energy, &seam), cheapest_vertical_total(energy));
    }
}

#[test]
fn horizontal_seams_are_valid_and_minimal() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..40 {
        let (w, h) = (rng.random_range(1..12), rng.random_range(1..12));
        let carver = SeamCarver::new(&random_picture(&mut rng, w, h)).unwrap();
        let seam = carver.find_horizontal_seam();
        assert_eq!(validate_seam(&seam, w as usize, h), Ok(()));
        let energy = carver.energy_matrix();
        assert_eq!(
            horizontal_total(energy, &seam),
            cheapest_vertical_total(&energy.transposed())
        );
    }
}

#[test]
fn removing_found_seams_shrinks_by_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut carver = SeamCarver::new(&random_picture(&mut rng, 9, 7)).unwrap();
    for step in 0..6 {
        let (w, h) = (carver.width(), carver.height());
        if step % 2 == 0 {
            let seam = carver.find_vertical_seam();
            carver.remove_vertical_seam(&seam).unwrap();
            assert_eq!((carver.width(), carver.height()), (w - 1, h));
        } else {
            let seam = carver.find_horizontal_seam();
            carver.remove_horizontal_seam(&seam).unwrap();
            assert_eq!((carver.width(), carver.height()), (w, h - 1));
        }
        let matrix = carver.energy_matrix();
        assert_eq!(matrix.len(), (carver.width() * carver.height()) as usize + 2);
        assert_eq!(matrix.get(0), 0);
        assert_eq!(matrix.get(matrix.sink()), 0);
    }
    assert_eq!((carver.width(), carver.height()), (6, 4));
}

#[test]
fn energy_matrix_matches_fresh_computation_after_removal() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut carver = SeamCarver::new(&random_picture(&mut rng, 8, 8)).unwrap();
    let seam = carver.find_vertical_seam();
    carver.remove_vertical_seam(&seam).unwrap();
    let fresh = SeamCarver::new(&carver.picture()).unwrap();
    assert_eq!(carver.energy_matrix(), fresh.energy_matrix());
    for y in 0..carver.height() {
        for x in 0..carver.width() {
            assert_eq!(carver.energy(x, y), fresh.energy(x, y));
        }
    }
}

#[test]
fn border_pixels_always_cost_the_maximum() {
    let mut rng = StdRng::seed_from_u64(23);
    let (w, h) = (6, 5);
    let carver = SeamCarver::new(&random_picture(&mut rng, w, h)).unwrap();
    for x in 0..w {
        assert_eq!(carver.energy(x, 0), Ok(BORDER_ENERGY));
        assert_eq!(carver.energy(x, h - 1), Ok(BORDER_ENERGY));
    }
    for y in 0..h {
        assert_eq!(carver.energy(0, y), Ok(BORDER_ENERGY));
        assert_eq!(carver.energy(w - 1, y), Ok(BORDER_ENERGY));
    }
    assert!(matches!(
        carver.energy(w, 0),
        Err(SeamError::InvalidCoordinate { .. })
    ));
}

#[test]
fn transposing_twice_is_the_identity() {
    let mut rng = StdRng::seed_from_u64(29);
    let carver = SeamCarver::new(&random_picture(&mut rng, 7, 4)).unwrap();
    let matrix = carver.energy_matrix();
    let flipped = matrix.transposed();
    assert_eq!((flipped.width(), flipped.height()), (4, 7));
    assert_eq!(&flipped.transposed(), matrix);
}

#[test]
fn picture_snapshot_survives_further_carving() {
    let mut rng = StdRng::seed_from_u64(31);
    let original = random_picture(&mut rng, 5, 5);
    let mut carver = SeamCarver::new(&original).unwrap();
    assert_eq!(carver.picture(), original);
    let snapshot = carver.picture();
    let seam = carver.find_horizontal_seam();
    carver.remove_horizontal_seam(&seam).unwrap();
    assert_eq!(snapshot, original);
    assert_eq!(carver.picture().dimensions(), (5, 4));
}

#[test]
fn one_row_picture_cannot_lose_its_row() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut carver = SeamCarver::new(&random_picture(&mut rng, 5, 1)).unwrap();
    let seam = carver.find_horizontal_seam();
    assert_eq!(
        carver.remove_horizontal_seam(&seam),
        Err(SeamError::UnshrinkableDimension(Orientation::Horizontal))
    );
    let seam = carver.find_vertical_seam();
    carver.remove_vertical_seam(&seam).unwrap();
    assert_eq!((carver.width(), carver.height()), (4, 1));
}
