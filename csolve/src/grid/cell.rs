use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dims::Coord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    north: bool,
    east: bool,
    south: bool,
    west: bool,
    pub(crate) coord: Coord,
}

impl Cell {
    /// Cell closed from every side
    pub fn new(coord: Coord) -> Cell {
        Cell {
            north: true,
            east: true,
            south: true,
            west: true,
            coord,
        }
    }

    /// Cell without any walls
    pub fn open(coord: Coord) -> Cell {
        Cell {
            north: false,
            east: false,
            south: false,
            west: false,
            coord,
        }
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, wall: bool) {
        match dir {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        !self.has_wall(dir)
    }

    /// Directions without a wall, in search order
    pub fn open_ways(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.is_open(*dir))
    }

    pub fn get_coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> i32 {
        self.coord.0
    }

    pub fn col(&self) -> i32 {
        self.coord.1
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coord.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in the order the solver tries them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn offset(self) -> Coord {
        match self {
            Self::North => Coord(-1, 0),
            Self::East => Coord(0, 1),
            Self::South => Coord(1, 0),
            Self::West => Coord(0, -1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the direction leading from `from` to `to`, if the cells are adjacent
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match to - from {
            Coord(-1, 0) => Some(Self::North),
            Coord(0, 1) => Some(Self::East),
            Coord(1, 0) => Some(Self::South),
            Coord(0, -1) => Some(Self::West),
            _ => None,
        }
    }
}
