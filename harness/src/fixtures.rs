//! Fixture mazes for tests and benchmarks.
//!
//! Text fixtures use the format accepted by [`Grid::parse`]. Generated
//! fixtures build a [`Grid`] directly so their size can scale.

use mazewalk_grid::{Coordinate, Grid, GridError};

/// 3×3, no walls, start top-left, goal bottom-right. Every solution is 4 steps.
pub const OPEN_3X3: &str = concat!("A  \n", "   \n", "  B");

/// Goal sealed off by walls. Start's component has 16 cells.
pub const WALLED_GOAL: &str = concat!(
    "A   ####\n",
    "    #  #\n",
    "    # B#\n",
    "    ####",
);

/// Start's component is exactly 16 cells in [`WALLED_GOAL`].
pub const WALLED_GOAL_COMPONENT: usize = 16;

/// A single unbranched corridor. The only solution is 21 steps.
pub const CORRIDOR: &str = concat!(
    "##########\n",
    "#A     ###\n",
    "###### ###\n",
    "#      ###\n",
    "# ########\n",
    "#       B#\n",
    "##########",
);

/// A 16×29 maze with several dead ends. Shortest path is 30 steps.
pub const BRANCHING: &str = concat!(
    "###                 #########\n",
    "#   ###################   # #\n",
    "# ####                # # # #\n",
    "# ################### # # # #\n",
    "#                     # # # #\n",
    "##################### # # # #\n",
    "#   ##                # # # #\n",
    "# # ## ### ## ######### # # #\n",
    "# #    #   ##B#         # # #\n",
    "# # ## ################ # # #\n",
    "### ##             #### # # #\n",
    "### ############## ## # # # #\n",
    "###             ##    # # # #\n",
    "###### ######## ####### # # #\n",
    "###### ####             #   #\n",
    "A      ######################",
);

/// Every named text fixture, for table-driven tests.
pub const ALL: &[(&str, &str)] = &[
    ("open_3x3", OPEN_3X3),
    ("walled_goal", WALLED_GOAL),
    ("corridor", CORRIDOR),
    ("branching", BRANCHING),
];

/// `height × width` with no walls. Start top-left, goal bottom-right.
///
/// # Errors
///
/// Returns [`GridError::Empty`] if either dimension is zero.
pub fn open_field(height: usize, width: usize) -> Result<Grid, GridError> {
    Grid::from_rows(
        vec![vec![false; width]; height],
        Coordinate::new(0, 0),
        Coordinate::new(height.saturating_sub(1), width.saturating_sub(1)),
    )
}

/// A boustrophedon corridor: open rows joined by one gap at alternating ends.
///
/// Even rows are open. Odd rows are walls with a single gap, on the right
/// for rows 1, 5, 9, … and on the left for rows 3, 7, 11, …. A final odd
/// row is solid wall. The open cells form one simple path; start is `(0, 0)`
/// and the goal is the far end of that path, so the only solution visits
/// every open cell.
///
/// # Errors
///
/// Returns [`GridError::Empty`] if either dimension is zero.
pub fn serpentine(height: usize, width: usize) -> Result<Grid, GridError> {
    if height == 0 || width == 0 {
        return Err(GridError::Empty);
    }

    let rows: Vec<Vec<bool>> = (0..height)
        .map(|r| {
            if r % 2 == 0 {
                return vec![false; width];
            }
            if r + 1 == height {
                // A trailing gap row would only add a dead end.
                return vec![true; width];
            }
            let gap = if (r / 2) % 2 == 0 { width - 1 } else { 0 };
            (0..width).map(|c| c != gap).collect()
        })
        .collect();

    let last = if height % 2 == 1 { height - 1 } else { height - 2 };
    let goal_col = if (last / 2) % 2 == 1 { 0 } else { width - 1 };
    Grid::from_rows(rows, Coordinate::new(0, 0), Coordinate::new(last, goal_col))
}
