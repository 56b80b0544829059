//! Built-in input sets exercised by `satq cases`.

pub struct Case {
    pub name: &'static str,
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

pub const REFERENCE_CASES: [Case; 7] = [
    Case { name: "Test 1: Simple values", a: 1, b: 2, c: 3, d: 4 },
    Case { name: "Test 2: Simple values", a: 10, b: 20, c: 5, d: 10 },
    Case { name: "Test 3: Negative numbers", a: -5, b: 10, c: -20, d: -1 },
    Case { name: "Test 4: Positive overflow", a: 120, b: -25, c: 7, d: 6 },
    Case { name: "Test 5: Negative overflow", a: -120, b: 25, c: 7, d: 6 },
    Case { name: "Test 6: Zero values", a: 0, b: 0, c: 0, d: 0 },
    Case { name: "Test 7: Max and min inputs", a: 127, b: -128, c: 127, d: -128 },
];
