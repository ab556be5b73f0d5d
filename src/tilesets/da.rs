/// Danish tile points, indexed by label. Label 0 is the wildcard.
/// `Q` and `W` are not part of the danish tile distribution and score 0.
pub const TILESET: &[(char, u32)] = &[
    ('?', 0),
    ('A', 1),
    ('B', 3),
    ('C', 8),
    ('D', 2),
    ('E', 1),
    ('F', 3),
    ('G', 3),
    ('H', 4),
    ('I', 3),
    ('J', 4),
    ('K', 3),
    ('L', 2),
    ('M', 4),
    ('N', 1),
    ('O', 2),
    ('P', 4),
    ('Q', 0),
    ('R', 1),
    ('S', 2),
    ('T', 2),
    ('U', 3),
    ('V', 4),
    ('W', 0),
    ('X', 8),
    ('Y', 4),
    ('Z', 9),
    ('Æ', 4),
    ('Ø', 4),
    ('Å', 4),
];
