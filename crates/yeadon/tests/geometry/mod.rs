mod frame_invariants;
mod segment_properties;
mod stadium_round_trip;
