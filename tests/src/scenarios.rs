mod addressing;
mod cabling;
mod framing;
