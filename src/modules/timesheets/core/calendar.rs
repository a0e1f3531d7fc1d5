// Calendar colour assignment for the rendering layer.
//
// Workers are listed in a stable order per phase, and the n-th worker always gets the
// n-th palette entry, wrapping around once the palette is exhausted.

pub const PALETTE: [&str; 8] = [
    "#3a87ad", "#d9534f", "#5cb85c", "#f0ad4e", "#8e44ad", "#16a085", "#e67e22", "#7f8c8d",
];

pub fn calendar_color(worker_index: usize) -> &'static str {
    PALETTE[worker_index % PALETTE.len()]
}
