use clap::Parser;
use itertools::Itertools;
use pathsearch::search::{
    validate, Heuristic, HeuristicValue, SearchEngineName, SearchProblem, SearchResult, Transition,
    ZeroHeuristic,
};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve an ASCII maze with one of the pathsearch engines.
///
/// Maze format: `#` is a wall, `S` the start, `G` a goal (more than one is
/// allowed), anything else an open cell.
struct Cli {
    #[arg(help = "The maze file")]
    maze: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic to use (ignored by dfs and bfs)",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
enum HeuristicName {
    Zero,
    Manhattan,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Error)]
enum MazeError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("maze has no start cell (`S`)")]
    NoStart,
    #[error("maze has no goal cell (`G`)")]
    NoGoal,
    #[error("maze has more than one start cell")]
    MultipleStarts,
}

/// (row, column), row 0 at the top.
type Cell = (usize, usize);

#[derive(Debug)]
struct GridMaze {
    walls: Vec<Vec<bool>>,
    start: Cell,
    goals: Vec<Cell>,
}

impl GridMaze {
    fn from_path(path: &PathBuf) -> Result<Self, MazeError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    fn from_text(text: &str) -> Result<Self, MazeError> {
        let mut walls = vec![];
        let mut start = None;
        let mut goals = vec![];
        for (row, line) in text.lines().enumerate() {
            let mut wall_row = vec![];
            for (col, ch) in line.chars().enumerate() {
                wall_row.push(ch == '#');
                match ch {
                    'S' => {
                        if start.replace((row, col)).is_some() {
                            return Err(MazeError::MultipleStarts);
                        }
                    }
                    'G' => goals.push((row, col)),
                    _ => {}
                }
            }
            walls.push(wall_row);
        }
        if goals.is_empty() {
            return Err(MazeError::NoGoal);
        }
        Ok(Self {
            walls,
            start: start.ok_or(MazeError::NoStart)?,
            goals,
        })
    }

    fn is_open(&self, cell: Cell) -> bool {
        let (row, col) = cell;
        self.walls
            .get(row)
            .and_then(|wall_row| wall_row.get(col))
            .is_some_and(|&wall| !wall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn apply(&self, (row, col): Cell) -> Option<Cell> {
        match self {
            Direction::North => row.checked_sub(1).map(|row| (row, col)),
            Direction::South => Some((row + 1, col)),
            Direction::East => Some((row, col + 1)),
            Direction::West => col.checked_sub(1).map(|col| (row, col)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl SearchProblem for GridMaze {
    type State = Cell;
    type Action = Direction;

    fn get_start_state(&self) -> Cell {
        self.start
    }

    fn is_goal_state(&self, state: &Cell) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &Cell) -> Vec<Transition<Cell, Direction>> {
        Direction::ALL
            .iter()
            .filter_map(|direction| {
                direction
                    .apply(*state)
                    .filter(|&cell| self.is_open(cell))
                    .map(|cell| Transition::new(cell, *direction, 1.))
            })
            .collect()
    }
}

/// Manhattan distance to the nearest goal; admissible and consistent for
/// unit-cost four-connected grids.
#[derive(Debug)]
struct ManhattanHeuristic {}

impl Heuristic<GridMaze> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &Cell, problem: &GridMaze) -> HeuristicValue {
        problem
            .goals
            .iter()
            .map(|goal| {
                (state.0.abs_diff(goal.0) + state.1.abs_diff(goal.1)) as f64
            })
            .fold(HeuristicValue::from(f64::INFINITY), |best, distance| {
                best.min(distance.into())
            })
    }
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let maze = match GridMaze::from_path(&cli.maze) {
        Ok(maze) => maze,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    };

    let mut heuristic: Box<dyn Heuristic<GridMaze>> = match cli.heuristic_name {
        HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        HeuristicName::Manhattan => Box::new(ManhattanHeuristic {}),
    };

    let mut engine = cli.search_engine_name.create();
    let (result, statistics) = engine.search(&maze, heuristic.as_mut());
    info!(expanded_nodes = statistics.get_expanded_nodes());

    match result {
        SearchResult::Success(plan) => {
            let cost = validate(&plan, &maze).expect("engine returned an invalid plan");
            info!(plan_length = plan.len(), plan_cost = cost);
            println!("{}", plan.iter().join(" "));
        }
        SearchResult::Unsolvable => {
            println!("unsolvable");
            std::process::exit(1);
        }
    }
}
