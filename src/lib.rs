//! Small functional building blocks: value taps, control-flow combinators,
//! sequence and keyed-map shaping helpers, and canvas geometry.
//!
//! Every export is a standalone function (or a closure-returning partial
//! form of one); nothing here owns state or spawns work. The full surface
//! is re-exported at the crate root.

pub mod combinators;
pub mod geom;
pub mod keyed;
pub mod seq;
pub mod tap;
pub mod util;

pub use combinators::{
    append_string_if, constant, default_value, defaulted, flow, identity, if_then, or, when,
};
pub use geom::{
    are_coords_in_circle, hypot, round_to_increment, to_canvas_coords, OffsetFrame, Point,
};
pub use keyed::{
    bind_all_to, map_picked_values, map_to_obj, map_values, merge, pick, zip_obj, BoundFn,
    ContextFn, Keyed,
};
pub use seq::{
    append, indexes, join, make_array, map_if, map_indexes, map_indexes_2d, pair_with, prepend,
    spread_map,
};
pub use tap::{breakpoint, debug, log, print_newline, timer, trace, traced};
