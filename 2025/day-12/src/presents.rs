use std::cmp::Reverse;
use std::collections::HashSet;

use aoc_utils::{Grid, Point};
use bitvec::prelude::*;
use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// A present shape in every distinct orientation.
#[derive(Debug, Clone)]
pub struct Shape {
    area: usize,
    /// Cell offsets relative to the first cell in row-major order.
    orientations: Vec<Vec<Point>>,
}

impl Shape {
    fn from_rows(rows: &[String]) -> Result<Self> {
        let cells = Grid::parse(&rows.join("\n"), |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        let cells = cells
            .iter()
            .filter(|&(_, &filled)| filled)
            .map(|(p, _)| p)
            .collect_vec();
        if cells.is_empty() {
            bail!("Shape has no cells");
        }
        Ok(Self {
            area: cells.len(),
            orientations: orientations(&cells),
        })
    }
}

fn normalize(cells: &mut [Point]) {
    cells.sort_by_key(|p| (p.y, p.x));
    let origin = cells[0];
    for p in cells.iter_mut() {
        *p -= origin;
    }
}

/// The four rotations of `cells` and of its mirror image, duplicates removed.
fn orientations(cells: &[Point]) -> Vec<Vec<Point>> {
    let mirrored = cells.iter().map(|p| Point::new(-p.x, p.y)).collect_vec();
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();

    for mut current in [cells.to_vec(), mirrored] {
        for _ in 0..4 {
            current = current.iter().map(|p| Point::new(-p.y, p.x)).collect();
            let mut shape = current.clone();
            normalize(&mut shape);
            if seen.insert(shape.clone()) {
                distinct.push(shape);
            }
        }
    }
    distinct
}

/// A space under a tree and how many of each shape must fit in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

enum Item {
    Shape(usize, Vec<String>),
    Region(Region),
}

/// What follows the leading number of a line.
enum Tail {
    Shape(Vec<String>),
    Region(usize, Vec<usize>),
}

fn items<'a>() -> impl Parser<'a, &'a str, Vec<Item>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10).from_str::<usize>().unwrapped();

    // `4:` then the shape rows
    let shape = just(':')
        .ignore_then(text::newline())
        .ignore_then(
            one_of("#.")
                .repeated()
                .at_least(1)
                .collect::<String>()
                .separated_by(text::newline())
                .collect::<Vec<String>>(),
        )
        .map(Tail::Shape);

    // `12x5: 1 0 1 0 2 2`
    let region = just('x')
        .ignore_then(number)
        .then_ignore(just(':').padded())
        .then(number.separated_by(just(' ')).collect::<Vec<usize>>())
        .map(|(height, counts)| Tail::Region(height, counts));

    number
        .then(choice((shape, region)))
        .map(|(first, tail)| match tail {
            Tail::Shape(rows) => Item::Shape(first, rows),
            Tail::Region(height, counts) => Item::Region(Region {
                width: first,
                height,
                counts,
            }),
        })
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

/// Parses the shape catalogue, indexed by id, and the regions to fill.
pub fn parse(input: &str) -> Result<(Vec<Shape>, Vec<Region>)> {
    let items = items()
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    for item in items {
        match item {
            Item::Shape(id, rows) => {
                if id != shapes.len() {
                    bail!("Expected shape {} but found shape {id}", shapes.len());
                }
                shapes.push(Shape::from_rows(&rows)?);
            }
            Item::Region(region) => regions.push(region),
        }
    }
    Ok((shapes, regions))
}

/// One shape placed at one anchor cell.
struct Placement {
    anchor: usize,
    cells: BitVec,
}

/// Backtracking state for one shape copy: which placement is on the board and
/// where to resume once it is lifted again.
struct Frame {
    task: usize,
    placed: usize,
    min_anchor: usize,
    next: usize,
    current: Option<usize>,
}

impl Frame {
    fn new(task: usize, placed: usize, min_anchor: usize) -> Self {
        Self {
            task,
            placed,
            min_anchor,
            next: 0,
            current: None,
        }
    }
}

/// Exact packing search for a single region.
pub struct Packer {
    /// `(placements, copies)` per required shape, largest shapes first.
    tasks: Vec<(Vec<Placement>, usize)>,
    cells: usize,
}

impl Packer {
    /// Prepares the search, or `None` when the region can be ruled out
    /// without searching.
    pub fn new(shapes: &[Shape], region: &Region) -> Result<Option<Self>> {
        let cells = region.width * region.height;

        let mut required = Vec::new();
        for (id, &copies) in region.counts.iter().enumerate() {
            if copies == 0 {
                continue;
            }
            let shape = shapes
                .get(id)
                .ok_or_else(|| miette!("Region needs unknown shape {id}"))?;
            required.push((shape, copies));
        }

        let area: usize = required.iter().map(|(shape, copies)| shape.area * copies).sum();
        if area > cells {
            return Ok(None);
        }

        required.sort_by_key(|(shape, _)| Reverse(shape.area));

        let mut tasks = Vec::with_capacity(required.len());
        for (shape, copies) in required {
            let placements = placements(shape, region);
            if placements.is_empty() {
                return Ok(None);
            }
            tasks.push((placements, copies));
        }

        Ok(Some(Self { tasks, cells }))
    }

    /// Whether every required copy fits without overlap.
    pub fn fits(&self) -> bool {
        let mut board = bitvec![0; self.cells];
        let mut stack = vec![Frame::new(0, 0, 0)];

        while let Some(frame) = stack.last_mut() {
            let Some((placements, copies)) = self.tasks.get(frame.task) else {
                return true;
            };

            if let Some(lifted) = frame.current.take() {
                for i in placements[lifted].cells.iter_ones() {
                    board.set(i, false);
                }
            }

            let found = (frame.next..placements.len()).find(|&i| {
                let placement = &placements[i];
                // Identical copies go in increasing anchor order.
                placement.anchor >= frame.min_anchor
                    && !placement.cells.iter_ones().any(|cell| board[cell])
            });

            let Some(i) = found else {
                stack.pop();
                continue;
            };

            let placement = &placements[i];
            for cell in placement.cells.iter_ones() {
                board.set(cell, true);
            }
            frame.current = Some(i);
            frame.next = i + 1;

            let child = if frame.placed + 1 == *copies {
                Frame::new(frame.task + 1, 0, 0)
            } else {
                Frame::new(frame.task, frame.placed + 1, placement.anchor)
            };
            stack.push(child);
        }

        false
    }
}

/// Every in-bounds footprint of `shape`, one per distinct cell set, ordered
/// by anchor.
fn placements(shape: &Shape, region: &Region) -> Vec<Placement> {
    let (w, h) = (region.width as i32, region.height as i32);
    let mut placements = Vec::new();

    for orientation in &shape.orientations {
        for anchor in (0..h).flat_map(|y| (0..w).map(move |x| Point::new(x, y))) {
            let mut cells = bitvec![0; region.width * region.height];
            let fits = orientation.iter().all(|&offset| {
                let p = anchor + offset;
                let inside = (0..w).contains(&p.x) && (0..h).contains(&p.y);
                if inside {
                    cells.set((p.y * w + p.x) as usize, true);
                }
                inside
            });
            if fits {
                placements.push(Placement {
                    anchor: (anchor.y * w + anchor.x) as usize,
                    cells,
                });
            }
        }
    }

    placements.sort_unstable_by(|a, b| a.cells.cmp(&b.cells));
    placements.dedup_by(|a, b| a.cells == b.cells);
    placements.sort_by_key(|p| p.anchor);
    placements
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";
