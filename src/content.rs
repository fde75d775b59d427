//! The book itself: thirty pages of static curriculum data, defined
//! once at startup and never mutated. Rendering state (expanded
//! sections, revealed examples, quiz answers) lives in the views, not
//! here.

#[derive(Clone, Copy, PartialEq)]
pub enum PageKind {
    Cover,
    Contents,
    Content,
    Quiz,
    References,
}

#[derive(Clone, Copy, PartialEq)]
pub enum VennOp {
    Union,
    Intersection,
    Difference,
}

#[derive(Clone, PartialEq)]
pub enum Block {
    Text(&'static str),
    Heading {
        level: u8,
        text: &'static str,
    },
    Definition(&'static str),
    /// Revealable worked example. The toggle key is the block's
    /// position within the page.
    Example {
        title: &'static str,
        lines: Vec<&'static str>,
    },
    Venn {
        title: &'static str,
        set_a: Vec<i32>,
        set_b: Vec<i32>,
        op: Option<VennOp>,
    },
    List {
        ordered: bool,
        items: Vec<&'static str>,
    },
    Formula {
        formula: &'static str,
        description: Option<&'static str>,
    },
    /// Expandable section holding nested blocks (one level deep in
    /// practice).
    Collapsible {
        title: &'static str,
        blocks: Vec<Block>,
    },
    Table {
        headers: Vec<&'static str>,
        rows: Vec<Vec<&'static str>>,
    },
}

#[derive(Clone, PartialEq)]
pub struct Page {
    pub id: usize,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub kind: PageKind,
    pub blocks: Vec<Block>,
}

pub fn pages() -> Vec<Page> {
    vec![
        // Page 1 - Cover
        Page {
            id: 1,
            title: "SETS",
            subtitle: Some("Understanding the Foundation of Discrete Mathematics"),
            kind: PageKind::Cover,
            blocks: Vec::new(),
        },
        // Page 2 - Table of Contents
        Page {
            id: 2,
            title: "Table of Contents",
            subtitle: None,
            kind: PageKind::Contents,
            blocks: Vec::new(),
        },
        // Page 3 - Introduction to Sets
        Page {
            id: 3,
            title: "Introduction to Sets",
            subtitle: Some("The Building Blocks of Mathematics"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "A set is a well-defined collection of distinct objects, called elements or members of the set.",
                ),
                Block::Text(
                    "Sets are one of the most fundamental concepts in mathematics. They provide the foundation for virtually all mathematical structures and are essential in discrete mathematics, computer science, and logic.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Key Characteristics of Sets",
                },
                Block::List {
                    ordered: false,
                    items: vec![
                        "Well-defined: It must be clear whether an object belongs to the set or not",
                        "Distinct elements: No element appears more than once in a set",
                        "Unordered: The order of elements does not matter",
                        "Can be finite or infinite",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Basic Notation",
                },
                Block::Formula {
                    formula: "A = {1, 2, 3, 4}",
                    description: Some("Set A containing elements 1, 2, 3, and 4"),
                },
                Block::Formula {
                    formula: "3 ∈ A",
                    description: Some("3 is an element of set A (membership)"),
                },
                Block::Formula {
                    formula: "5 ∉ A",
                    description: Some("5 is not an element of set A"),
                },
            ],
        },
        // Page 4 - Visual Introduction with Venn Diagram
        Page {
            id: 4,
            title: "Visualizing Sets",
            subtitle: Some("Venn Diagrams and Set Representation"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Sets can be visualized using Venn diagrams, which show relationships between different sets using circles or other shapes.",
                ),
                Block::Venn {
                    title: "Interactive Example: Sets A and B",
                    set_a: vec![1, 2, 3, 5],
                    set_b: vec![3, 4, 5, 6],
                    op: None,
                },
                Block::Text(
                    "In the diagram above, you can see how elements are distributed between sets A and B. Notice how some elements appear in both sets (intersection), while others appear in only one set.",
                ),
                Block::Example {
                    title: "Real-world Applications",
                    lines: vec![
                        "Students enrolled in Mathematics: {Alice, Bob, Charlie, Diana}",
                        "Students enrolled in Physics: {Bob, Charlie, Eve, Frank}",
                        "Students in both courses: {Bob, Charlie}",
                        "Students only in Math: {Alice, Diana}",
                        "Students only in Physics: {Eve, Frank}",
                    ],
                },
            ],
        },
        // Page 5 - Set Builder Notation
        Page {
            id: 5,
            title: "Set Builder Notation",
            subtitle: Some("Mathematical Description of Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "Set builder notation describes a set by stating the properties that its elements must satisfy.",
                ),
                Block::Formula {
                    formula: "A = {x | condition}",
                    description: Some(
                        "Read as \"A is the set of all x such that condition is true\"",
                    ),
                },
                Block::Heading {
                    level: 3,
                    text: "Examples of Set Builder Notation",
                },
                Block::Example {
                    title: "Even Numbers",
                    lines: vec![
                        "E = {x | x is an even integer}",
                        "E = {x | x = 2k for some integer k}",
                        "This represents the set {..., -4, -2, 0, 2, 4, 6, ...}",
                    ],
                },
                Block::Example {
                    title: "Bounded Sets",
                    lines: vec![
                        "B = {x | 1 ≤ x ≤ 10, x ∈ ℕ}",
                        "B = {1, 2, 3, 4, 5, 6, 7, 8, 9, 10}",
                        "Natural numbers from 1 to 10 inclusive",
                    ],
                },
                Block::Collapsible {
                    title: "Practice: Converting Between Notations",
                    blocks: vec![
                        Block::Text("Convert these roster form sets to set builder notation:"),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "A = {2, 4, 6, 8, 10} → A = {x | x = 2k, 1 ≤ k ≤ 5, k ∈ ℕ}",
                                "B = {1, 4, 9, 16, 25} → B = {x | x = n², 1 ≤ n ≤ 5, n ∈ ℕ}",
                                "C = {a, e, i, o, u} → C = {x | x is a vowel in English alphabet}",
                            ],
                        },
                    ],
                },
            ],
        },
        // Page 6 - Types of Sets: Empty and Universal
        Page {
            id: 6,
            title: "Types of Sets",
            subtitle: Some("Empty Sets and Universal Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Heading {
                    level: 3,
                    text: "Empty Set (Null Set)",
                },
                Block::Definition(
                    "The empty set is a set containing no elements. It is denoted by ∅ or { }.",
                ),
                Block::Formula {
                    formula: "∅ = { }",
                    description: Some("The empty set has cardinality 0"),
                },
                Block::Example {
                    title: "Examples of Empty Sets",
                    lines: vec![
                        "The set of all unicorns: ∅",
                        "The set of real numbers x such that x² = -1: ∅",
                        "The set of months with 32 days: ∅",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Universal Set",
                },
                Block::Definition(
                    "The universal set U is the set that contains all objects under consideration in a particular context.",
                ),
                Block::Example {
                    title: "Context-Dependent Universal Sets",
                    lines: vec![
                        "When discussing integers: U = ℤ = {..., -2, -1, 0, 1, 2, ...}",
                        "When discussing students in a class: U = {all students in the class}",
                        "When discussing playing cards: U = {all 52 cards in a standard deck}",
                    ],
                },
            ],
        },
        // Page 7 - Finite and Infinite Sets
        Page {
            id: 7,
            title: "Finite and Infinite Sets",
            subtitle: Some("Understanding Set Size"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Heading {
                    level: 3,
                    text: "Finite Sets",
                },
                Block::Definition(
                    "A finite set is a set with a finite number of elements. The number of elements in a finite set is called its cardinality.",
                ),
                Block::Formula {
                    formula: "|A| = n",
                    description: Some(
                        "The cardinality of set A is n (where n is a non-negative integer)",
                    ),
                },
                Block::Example {
                    title: "Examples of Finite Sets",
                    lines: vec![
                        "Days of the week: {Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday}, |A| = 7",
                        "Digits: {0, 1, 2, 3, 4, 5, 6, 7, 8, 9}, |B| = 10",
                        "Empty set: ∅, |∅| = 0",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Infinite Sets",
                },
                Block::Definition(
                    "An infinite set is a set with infinitely many elements. Its cardinality is denoted as ∞.",
                ),
                Block::Example {
                    title: "Examples of Infinite Sets",
                    lines: vec![
                        "Natural numbers: ℕ = {1, 2, 3, 4, ...}",
                        "Even integers: {2, 4, 6, 8, ...}",
                        "Real numbers between 0 and 1: (0, 1)",
                        "All points on a line segment",
                    ],
                },
                Block::Collapsible {
                    title: "Interesting Fact: Different Types of Infinity",
                    blocks: vec![
                        Block::Text(
                            "Not all infinite sets have the same \"size\". Some infinite sets are larger than others!",
                        ),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "Countably infinite: Can be put in one-to-one correspondence with natural numbers (like ℕ, ℤ, ℚ)",
                                "Uncountably infinite: Cannot be counted (like ℝ, the set of all real numbers)",
                                "The set of real numbers is \"larger\" than the set of natural numbers",
                            ],
                        },
                    ],
                },
            ],
        },
        // Page 8 - Singleton and Equal Sets
        Page {
            id: 8,
            title: "Singleton and Equal Sets",
            subtitle: Some("Special Types of Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Heading {
                    level: 3,
                    text: "Singleton Sets",
                },
                Block::Definition("A singleton set is a set containing exactly one element."),
                Block::Formula {
                    formula: "S = {a}",
                    description: Some(
                        "Set S is a singleton containing only element a, |S| = 1",
                    ),
                },
                Block::Example {
                    title: "Examples of Singleton Sets",
                    lines: vec![
                        "{0} - the set containing only zero",
                        "{∅} - the set containing only the empty set (note: this is not empty!)",
                        "{π} - the set containing only the number pi",
                        "Important: {0} ≠ ∅. The first contains zero; the second contains nothing.",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Equal Sets",
                },
                Block::Definition(
                    "Two sets A and B are equal (A = B) if and only if they contain exactly the same elements.",
                ),
                Block::Formula {
                    formula: "A = B ⟺ (∀x)(x ∈ A ⟺ x ∈ B)",
                    description: Some(
                        "A equals B if and only if every element of A is in B and vice versa",
                    ),
                },
                Block::Example {
                    title: "Examples of Equal Sets",
                    lines: vec![
                        "{1, 2, 3} = {3, 1, 2} = {1, 2, 3, 1} (order and repetition don't matter)",
                        "{x | x² = 4} = {-2, 2} (both represent the same set)",
                        "{x | x is a prime number less than 5} = {2, 3}",
                    ],
                },
            ],
        },
        // Page 9 - Equivalent Sets
        Page {
            id: 9,
            title: "Equivalent Sets",
            subtitle: Some("Same Size, Different Elements"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "Two sets A and B are equivalent (A ~ B) if they have the same cardinality (same number of elements).",
                ),
                Block::Formula {
                    formula: "A ~ B ⟺ |A| = |B|",
                    description: Some(
                        "Sets A and B are equivalent if their cardinalities are equal",
                    ),
                },
                Block::Heading {
                    level: 3,
                    text: "Equal vs Equivalent Sets",
                },
                Block::Table {
                    headers: vec!["Property", "Equal Sets (A = B)", "Equivalent Sets (A ~ B)"],
                    rows: vec![
                        vec!["Same elements", "Yes", "Not necessarily"],
                        vec!["Same cardinality", "Yes", "Yes"],
                        vec!["Example", "{1, 2, 3} = {3, 1, 2}", "{1, 2, 3} ~ {a, b, c}"],
                        vec![
                            "Relationship",
                            "If A = B, then A ~ B",
                            "A ~ B does not imply A = B",
                        ],
                    ],
                },
                Block::Example {
                    title: "Examples of Equivalent Sets",
                    lines: vec![
                        "{1, 2, 3} ~ {a, b, c} (both have cardinality 3)",
                        "{red, green, blue} ~ {apple, banana, cherry} (both have cardinality 3)",
                        "ℕ ~ ℤ (both are countably infinite)",
                        "{x | x is a day of the week} ~ {x | x is a color of the rainbow} (both have 7 elements)",
                    ],
                },
                Block::Collapsible {
                    title: "One-to-One Correspondence",
                    blocks: vec![
                        Block::Definition(
                            "Two sets are equivalent if there exists a one-to-one correspondence (bijection) between their elements.",
                        ),
                        Block::Text(
                            "Example: {1, 2, 3} ~ {a, b, c} because we can pair: 1↔a, 2↔b, 3↔c",
                        ),
                        Block::Text(
                            "This concept is crucial for understanding infinite sets and different types of infinity.",
                        ),
                    ],
                },
            ],
        },
        // Page 10 - Set Representation Methods
        Page {
            id: 10,
            title: "Methods of Set Representation",
            subtitle: Some("Different Ways to Describe Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "There are several ways to represent sets, each with its own advantages depending on the context and purpose.",
                ),
                Block::Heading {
                    level: 3,
                    text: "1. Roster Method (Tabular Form)",
                },
                Block::Definition(
                    "The roster method lists all elements of the set explicitly, separated by commas and enclosed in braces.",
                ),
                Block::Example {
                    title: "Roster Method Examples",
                    lines: vec![
                        "A = {1, 2, 3, 4, 5}",
                        "B = {red, green, blue}",
                        "C = {2, 4, 6, 8, ...} (using ellipsis for patterns)",
                        "D = {..., -2, -1, 0, 1, 2, ...} (infinite sets with patterns)",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "2. Set Builder Method",
                },
                Block::Definition(
                    "Set builder notation describes a set by specifying a property that its elements must satisfy.",
                ),
                Block::Example {
                    title: "Set Builder Examples",
                    lines: vec![
                        "A = {x | 1 ≤ x ≤ 5, x ∈ ℕ}",
                        "B = {x | x is a primary color}",
                        "C = {x | x = 2n, n ∈ ℕ} (even natural numbers)",
                        "D = {x | x ∈ ℤ} (all integers)",
                    ],
                },
            ],
        },
        // Page 11 - Venn Diagrams
        Page {
            id: 11,
            title: "Venn Diagrams",
            subtitle: Some("Visual Representation of Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "A Venn diagram is a pictorial representation of sets using circles or other closed curves, typically drawn within a rectangle representing the universal set.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Components of a Venn Diagram",
                },
                Block::List {
                    ordered: false,
                    items: vec![
                        "Rectangle: Represents the universal set U",
                        "Circles: Represent individual sets",
                        "Overlapping regions: Show elements common to multiple sets",
                        "Non-overlapping regions: Show elements unique to each set",
                    ],
                },
                Block::Venn {
                    title: "Basic Two-Set Venn Diagram",
                    set_a: vec![1, 2, 3, 7],
                    set_b: vec![3, 4, 5, 6],
                    op: None,
                },
                Block::Example {
                    title: "Reading Venn Diagrams",
                    lines: vec![
                        "Elements only in A: {1, 2, 7}",
                        "Elements only in B: {4, 5, 6}",
                        "Elements in both A and B: {3}",
                        "Elements in A or B (or both): {1, 2, 3, 4, 5, 6, 7}",
                    ],
                },
                Block::Collapsible {
                    title: "Venn Diagram Rules and Conventions",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Each element appears in exactly one region of the diagram",
                            "Overlapping regions represent intersections",
                            "The universal set contains all relevant elements",
                            "Elements outside all circles but inside the rectangle are in U but not in any named set",
                        ],
                    }],
                },
            ],
        },
        // Page 12 - Interval Notation
        Page {
            id: 12,
            title: "Interval Notation",
            subtitle: Some("Representing Continuous Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "Interval notation is a method of representing sets of real numbers that form intervals on the number line.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Types of Intervals",
                },
                Block::Table {
                    headers: vec!["Notation", "Description", "Set Builder Form", "Graph"],
                    rows: vec![
                        vec!["[a, b]", "Closed interval", "{x | a ≤ x ≤ b}", "●───●"],
                        vec!["(a, b)", "Open interval", "{x | a < x < b}", "○───○"],
                        vec!["[a, b)", "Half-open interval", "{x | a ≤ x < b}", "●───○"],
                        vec!["(a, b]", "Half-open interval", "{x | a < x ≤ b}", "○───●"],
                        vec!["[a, ∞)", "Unbounded interval", "{x | x ≥ a}", "●───→"],
                        vec!["(-∞, b]", "Unbounded interval", "{x | x ≤ b}", "←───●"],
                    ],
                },
                Block::Example {
                    title: "Interval Notation Examples",
                    lines: vec![
                        "[2, 5] = {x | 2 ≤ x ≤ 5} includes endpoints 2 and 5",
                        "(0, 1) = {x | 0 < x < 1} excludes endpoints 0 and 1",
                        "[3, 7) = {x | 3 ≤ x < 7} includes 3 but excludes 7",
                        "(-∞, 0) = {x | x < 0} all negative real numbers",
                    ],
                },
                Block::Collapsible {
                    title: "Union of Intervals",
                    blocks: vec![
                        Block::Text("Multiple intervals can be combined using union (∪):"),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "(-∞, 2) ∪ (3, ∞) represents all real numbers except [2, 3]",
                                "[1, 2] ∪ [4, 5] represents two separate closed intervals",
                                "(-1, 1) ∪ (2, 4) ∪ (6, 8) represents three separate open intervals",
                            ],
                        },
                    ],
                },
            ],
        },
        // Page 13 - Set Operations: Union
        Page {
            id: 13,
            title: "Set Operations: Union",
            subtitle: Some("Combining Sets Together"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The union of two sets A and B, denoted A ∪ B, is the set containing all elements that are in A or in B or in both.",
                ),
                Block::Formula {
                    formula: "A ∪ B = {x | x ∈ A or x ∈ B}",
                    description: Some("Union contains all elements from both sets"),
                },
                Block::Venn {
                    title: "Union Operation Visualization",
                    set_a: vec![1, 2, 3],
                    set_b: vec![3, 4, 5],
                    op: Some(VennOp::Union),
                },
                Block::Example {
                    title: "Union Examples",
                    lines: vec![
                        "A = {1, 2, 3}, B = {3, 4, 5}",
                        "A ∪ B = {1, 2, 3, 4, 5}",
                        "Note: Element 3 appears in both sets but only once in the union",
                        "",
                        "C = {red, green}, D = {blue, yellow}",
                        "C ∪ D = {red, green, blue, yellow}",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Properties of Union",
                },
                Block::Collapsible {
                    title: "Union Properties",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Commutative: A ∪ B = B ∪ A",
                            "Associative: (A ∪ B) ∪ C = A ∪ (B ∪ C)",
                            "Identity: A ∪ ∅ = A",
                            "Idempotent: A ∪ A = A",
                            "Absorption: A ∪ (A ∩ B) = A",
                        ],
                    }],
                },
            ],
        },
        // Page 14 - Set Operations: Intersection
        Page {
            id: 14,
            title: "Set Operations: Intersection",
            subtitle: Some("Finding Common Elements"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The intersection of two sets A and B, denoted A ∩ B, is the set containing all elements that are in both A and B.",
                ),
                Block::Formula {
                    formula: "A ∩ B = {x | x ∈ A and x ∈ B}",
                    description: Some("Intersection contains only common elements"),
                },
                Block::Venn {
                    title: "Intersection Operation Visualization",
                    set_a: vec![1, 2, 3, 7],
                    set_b: vec![3, 4, 5, 7],
                    op: Some(VennOp::Intersection),
                },
                Block::Example {
                    title: "Intersection Examples",
                    lines: vec![
                        "A = {1, 2, 3, 7}, B = {3, 4, 5, 7}",
                        "A ∩ B = {3, 7}",
                        "Only elements present in both sets",
                        "",
                        "E = {2, 4, 6, 8}, O = {1, 3, 5, 7}",
                        "E ∩ O = ∅ (disjoint sets - no common elements)",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Disjoint Sets",
                },
                Block::Definition(
                    "Two sets A and B are called disjoint if their intersection is empty: A ∩ B = ∅.",
                ),
                Block::Collapsible {
                    title: "Properties of Intersection",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Commutative: A ∩ B = B ∩ A",
                            "Associative: (A ∩ B) ∩ C = A ∩ (B ∩ C)",
                            "Identity: A ∩ U = A (where U is universal set)",
                            "Zero: A ∩ ∅ = ∅",
                            "Idempotent: A ∩ A = A",
                        ],
                    }],
                },
            ],
        },
        // Page 15 - Set Operations: Difference
        Page {
            id: 15,
            title: "Set Operations: Difference",
            subtitle: Some("Elements in One Set But Not Another"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The difference of two sets A and B, denoted A - B or A \\ B, is the set containing all elements that are in A but not in B.",
                ),
                Block::Formula {
                    formula: "A - B = {x | x ∈ A and x ∉ B}",
                    description: Some("Difference contains elements unique to the first set"),
                },
                Block::Venn {
                    title: "Difference Operation Visualization",
                    set_a: vec![1, 2, 3, 7],
                    set_b: vec![3, 4, 5, 7],
                    op: Some(VennOp::Difference),
                },
                Block::Example {
                    title: "Difference Examples",
                    lines: vec![
                        "A = {1, 2, 3, 7}, B = {3, 4, 5, 7}",
                        "A - B = {1, 2} (elements in A but not in B)",
                        "B - A = {4, 5} (elements in B but not in A)",
                        "Note: A - B ≠ B - A in general",
                        "",
                        "S = {1, 2, 3, 4, 5}, T = {4, 5, 6, 7}",
                        "S - T = {1, 2, 3}, T - S = {6, 7}",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Important Properties",
                },
                Block::Collapsible {
                    title: "Difference Properties",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Not commutative: A - B ≠ B - A (usually)",
                            "A - ∅ = A",
                            "A - A = ∅",
                            "A - B = A if A ∩ B = ∅",
                            "∅ - A = ∅",
                            "A - B = A ∩ B' (where B' is the complement of B)",
                        ],
                    }],
                },
            ],
        },
        // Page 16 - Set Operations: Complement
        Page {
            id: 16,
            title: "Set Operations: Complement",
            subtitle: Some("Everything Not in the Set"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The complement of a set A, denoted A' or Ā or A^c, is the set of all elements in the universal set U that are not in A.",
                ),
                Block::Formula {
                    formula: "A' = {x | x ∈ U and x ∉ A} = U - A",
                    description: Some("Complement with respect to universal set U"),
                },
                Block::Example {
                    title: "Complement Examples",
                    lines: vec![
                        "If U = {1, 2, 3, 4, 5, 6, 7, 8, 9, 10} and A = {2, 4, 6, 8, 10}",
                        "Then A' = {1, 3, 5, 7, 9} (all odd numbers in U)",
                        "",
                        "If U = {all students in class} and B = {students who passed}",
                        "Then B' = {students who did not pass}",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Complement Laws",
                },
                Block::Table {
                    headers: vec!["Law", "Formula", "Description"],
                    rows: vec![
                        vec![
                            "Double Complement",
                            "(A')' = A",
                            "Complement of complement is original set",
                        ],
                        vec![
                            "Universal Complement",
                            "U' = ∅",
                            "Complement of universal set is empty",
                        ],
                        vec![
                            "Empty Set Complement",
                            "∅' = U",
                            "Complement of empty set is universal",
                        ],
                        vec![
                            "Complement Union",
                            "A ∪ A' = U",
                            "Set union with complement is universal",
                        ],
                        vec![
                            "Complement Intersection",
                            "A ∩ A' = ∅",
                            "Set intersection with complement is empty",
                        ],
                    ],
                },
                Block::Collapsible {
                    title: "De Morgan's Laws",
                    blocks: vec![
                        Block::Definition(
                            "De Morgan's Laws relate complements to unions and intersections:",
                        ),
                        Block::Formula {
                            formula: "(A ∪ B)' = A' ∩ B'",
                            description: Some(
                                "Complement of union equals intersection of complements",
                            ),
                        },
                        Block::Formula {
                            formula: "(A ∩ B)' = A' ∪ B'",
                            description: Some(
                                "Complement of intersection equals union of complements",
                            ),
                        },
                    ],
                },
            ],
        },
        // Page 17 - Symmetric Difference
        Page {
            id: 17,
            title: "Symmetric Difference",
            subtitle: Some("Elements in Either Set, But Not Both"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The symmetric difference of two sets A and B, denoted A ⊕ B or A △ B, is the set of elements that are in either A or B, but not in both.",
                ),
                Block::Formula {
                    formula: "A ⊕ B = (A - B) ∪ (B - A) = (A ∪ B) - (A ∩ B)",
                    description: Some("Symmetric difference excludes common elements"),
                },
                Block::Example {
                    title: "Symmetric Difference Examples",
                    lines: vec![
                        "A = {1, 2, 3, 4}, B = {3, 4, 5, 6}",
                        "A - B = {1, 2}, B - A = {5, 6}",
                        "A ⊕ B = {1, 2, 5, 6}",
                        "",
                        "Think of it as \"exclusive or\" - elements in A or B, but not both",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Visual Representation",
                },
                Block::Text(
                    "In a Venn diagram, the symmetric difference is represented by the shaded regions that belong to only one of the sets (the non-overlapping parts).",
                ),
                Block::Collapsible {
                    title: "Properties of Symmetric Difference",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Commutative: A ⊕ B = B ⊕ A",
                            "Associative: (A ⊕ B) ⊕ C = A ⊕ (B ⊕ C)",
                            "Identity: A ⊕ ∅ = A",
                            "Self-inverse: A ⊕ A = ∅",
                            "A ⊕ B = ∅ if and only if A = B",
                        ],
                    }],
                },
            ],
        },
        // Page 18 - Cartesian Product
        Page {
            id: 18,
            title: "Cartesian Product",
            subtitle: Some("Ordered Pairs from Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The Cartesian product of two sets A and B, denoted A × B, is the set of all ordered pairs (a, b) where a ∈ A and b ∈ B.",
                ),
                Block::Formula {
                    formula: "A × B = {(a, b) | a ∈ A and b ∈ B}",
                    description: Some("All possible ordered pairs from A and B"),
                },
                Block::Example {
                    title: "Cartesian Product Examples",
                    lines: vec![
                        "A = {1, 2}, B = {x, y}",
                        "A × B = {(1, x), (1, y), (2, x), (2, y)}",
                        "|A × B| = |A| × |B| = 2 × 2 = 4",
                        "",
                        "Note: Order matters! (1, x) ≠ (x, 1)",
                        "Also: A × B ≠ B × A in general",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Real-World Applications",
                },
                Block::Example {
                    title: "Coordinate System",
                    lines: vec![
                        "ℝ × ℝ represents all points in the coordinate plane",
                        "Each point (x, y) is an ordered pair of real numbers",
                        "Database relations: Students × Courses gives all possible student-course pairs",
                        "Menu combinations: Appetizers × Main Courses × Desserts",
                    ],
                },
                Block::Collapsible {
                    title: "Properties of Cartesian Product",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Not commutative: A × B ≠ B × A (usually)",
                            "|A × B| = |A| × |B|",
                            "A × ∅ = ∅ × A = ∅",
                            "Distributive over union: A × (B ∪ C) = (A × B) ∪ (A × C)",
                            "Distributive over intersection: A × (B ∩ C) = (A × B) ∩ (A × C)",
                        ],
                    }],
                },
            ],
        },
        // Page 19 - Multiple Set Operations
        Page {
            id: 19,
            title: "Complex Set Operations",
            subtitle: Some("Combining Multiple Operations"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Real-world problems often require combining multiple set operations. Understanding precedence and using parentheses correctly is crucial.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Order of Operations",
                },
                Block::List {
                    ordered: true,
                    items: vec![
                        "Complement (highest precedence)",
                        "Intersection",
                        "Union (lowest precedence)",
                        "Use parentheses to change order",
                    ],
                },
                Block::Example {
                    title: "Complex Operation Examples",
                    lines: vec![
                        "Given: A = {1, 2, 3}, B = {2, 3, 4}, C = {3, 4, 5}, U = {1, 2, 3, 4, 5}",
                        "",
                        "(A ∪ B) ∩ C = {1, 2, 3, 4} ∩ {3, 4, 5} = {3, 4}",
                        "A ∪ (B ∩ C) = {1, 2, 3} ∪ {3, 4} = {1, 2, 3, 4}",
                        "(A ∩ B)' = {2, 3}' = {1, 4, 5}",
                        "A' ∪ B' = {4, 5} ∪ {1, 5} = {1, 4, 5}",
                    ],
                },
                Block::Collapsible {
                    title: "Set Identities and Laws",
                    blocks: vec![Block::Table {
                        headers: vec!["Law", "Formula"],
                        rows: vec![
                            vec!["Commutative", "A ∪ B = B ∪ A, A ∩ B = B ∩ A"],
                            vec!["Associative", "(A ∪ B) ∪ C = A ∪ (B ∪ C)"],
                            vec!["Distributive", "A ∪ (B ∩ C) = (A ∪ B) ∩ (A ∪ C)"],
                            vec!["Identity", "A ∪ ∅ = A, A ∩ U = A"],
                            vec!["Complement", "A ∪ A' = U, A ∩ A' = ∅"],
                            vec!["De Morgan's", "(A ∪ B)' = A' ∩ B'"],
                        ],
                    }],
                },
            ],
        },
        // Page 20 - Set Operations Practice
        Page {
            id: 20,
            title: "Set Operations in Action",
            subtitle: Some("Step-by-Step Problem Solving"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Let's work through some comprehensive examples that combine multiple set operations and concepts.",
                ),
                Block::Example {
                    title: "Comprehensive Problem",
                    lines: vec![
                        "Given: U = {1, 2, 3, 4, 5, 6, 7, 8, 9, 10}",
                        "A = {2, 4, 6, 8, 10} (even numbers)",
                        "B = {1, 3, 5, 7, 9} (odd numbers)",
                        "C = {1, 2, 3, 4, 5} (numbers ≤ 5)",
                        "",
                        "Find: (A ∩ C) ∪ (B - C)'",
                    ],
                },
                Block::Collapsible {
                    title: "Step-by-Step Solution",
                    blocks: vec![
                        Block::Text("Step 1: Find A ∩ C"),
                        Block::Text("A ∩ C = {2, 4, 6, 8, 10} ∩ {1, 2, 3, 4, 5} = {2, 4}"),
                        Block::Text("Step 2: Find B - C"),
                        Block::Text("B - C = {1, 3, 5, 7, 9} - {1, 2, 3, 4, 5} = {7, 9}"),
                        Block::Text("Step 3: Find (B - C)'"),
                        Block::Text("(B - C)' = {7, 9}' = {1, 2, 3, 4, 5, 6, 8, 10}"),
                        Block::Text("Step 4: Find final result"),
                        Block::Text(
                            "(A ∩ C) ∪ (B - C)' = {2, 4} ∪ {1, 2, 3, 4, 5, 6, 8, 10} = {1, 2, 3, 4, 5, 6, 8, 10}",
                        ),
                    ],
                },
                Block::Example {
                    title: "Proving Set Identities",
                    lines: vec![
                        "Prove: A - (B ∩ C) = (A - B) ∪ (A - C)",
                        "",
                        "This can be proven using element-wise proof or using known identities.",
                        "Try working through this step-by-step using the definitions!",
                    ],
                },
            ],
        },
        // Page 21 - Equal Sets Deep Dive
        Page {
            id: 21,
            title: "Equal Sets: A Deeper Look",
            subtitle: Some("When Two Sets Are Exactly the Same"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "Two sets A and B are equal if and only if every element of A is also an element of B, and every element of B is also an element of A.",
                ),
                Block::Formula {
                    formula: "A = B ⟺ (A ⊆ B and B ⊆ A)",
                    description: Some("Sets are equal if they are subsets of each other"),
                },
                Block::Heading {
                    level: 3,
                    text: "Proving Set Equality",
                },
                Block::Example {
                    title: "Method 1: Element-wise Proof",
                    lines: vec![
                        "To prove A = B:",
                        "1. Show that if x ∈ A, then x ∈ B (A ⊆ B)",
                        "2. Show that if x ∈ B, then x ∈ A (B ⊆ A)",
                        "",
                        "Example: Prove {x | x² = 4} = {-2, 2}",
                        "Left side: x² = 4 implies x = ±2, so x ∈ {-2, 2}",
                        "Right side: (-2)² = 4 and 2² = 4, so both satisfy x² = 4",
                    ],
                },
                Block::Example {
                    title: "Method 2: Using Set Operations",
                    lines: vec![
                        "Show that A ⊆ B and B ⊆ A by proving:",
                        "• A ∩ B = A (this proves A ⊆ B)",
                        "• A ∪ B = B (this also proves A ⊆ B)",
                        "• A - B = ∅ (this proves A ⊆ B)",
                        "• Then prove the reverse inclusion",
                    ],
                },
            ],
        },
        // Page 22 - Equivalent Sets Deep Dive
        Page {
            id: 22,
            title: "Equivalent Sets: Same Cardinality",
            subtitle: Some("When Sets Have the Same Size"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Two sets are equivalent if there exists a one-to-one correspondence (bijection) between their elements. This concept is fundamental in understanding different types of infinity.",
                ),
                Block::Example {
                    title: "Finite Set Equivalence",
                    lines: vec![
                        "A = {apple, banana, cherry}",
                        "B = {1, 2, 3}",
                        "Bijection: apple ↔ 1, banana ↔ 2, cherry ↔ 3",
                        "Therefore A ~ B (A is equivalent to B)",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Infinite Set Equivalence",
                },
                Block::Example {
                    title: "Surprising Equivalences",
                    lines: vec![
                        "ℕ ~ ℤ: Natural numbers equivalent to integers!",
                        "Bijection: 1↔0, 2↔1, 3↔-1, 4↔2, 5↔-2, ...",
                        "Pattern: odd positions → positive integers, even positions → non-positive",
                        "",
                        "ℕ ~ ℚ⁺: Natural numbers equivalent to positive rationals!",
                        "This uses Cantor's diagonal argument for enumeration",
                    ],
                },
                Block::Collapsible {
                    title: "Cantor's Theorem",
                    blocks: vec![
                        Block::Definition(
                            "For any set A, the power set P(A) has strictly greater cardinality than A.",
                        ),
                        Block::Text("This means there are different \"sizes\" of infinity:"),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "|ℕ| = ℵ₀ (aleph-null) - countable infinity",
                                "|ℝ| = |P(ℕ)| = 2^ℵ₀ = c (continuum) - uncountable infinity",
                                "|P(ℝ)| = 2^c - even larger infinity!",
                            ],
                        },
                    ],
                },
            ],
        },
        // Page 23 - Subsets
        Page {
            id: 23,
            title: "Subsets",
            subtitle: Some("When One Set Is Contained in Another"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "Set A is a subset of set B (written A ⊆ B) if every element of A is also an element of B.",
                ),
                Block::Formula {
                    formula: "A ⊆ B ⟺ ∀x(x ∈ A → x ∈ B)",
                    description: Some("For all x, if x is in A, then x is in B"),
                },
                Block::Heading {
                    level: 3,
                    text: "Types of Subsets",
                },
                Block::Table {
                    headers: vec!["Type", "Notation", "Definition", "Example"],
                    rows: vec![
                        vec!["Subset", "A ⊆ B", "A is contained in B", "{1,2} ⊆ {1,2,3}"],
                        vec![
                            "Proper Subset",
                            "A ⊂ B",
                            "A ⊆ B and A ≠ B",
                            "{1,2} ⊂ {1,2,3}",
                        ],
                        vec![
                            "Not a Subset",
                            "A ⊄ B",
                            "A is not contained in B",
                            "{1,4} ⊄ {1,2,3}",
                        ],
                    ],
                },
                Block::Example {
                    title: "Subset Examples",
                    lines: vec![
                        "∅ ⊆ A for any set A (empty set is subset of every set)",
                        "A ⊆ A for any set A (every set is subset of itself)",
                        "{1, 2} ⊆ {1, 2, 3, 4}",
                        "{a} ⊆ {a, b, c}",
                        "If A ⊆ B and B ⊆ C, then A ⊆ C (transitivity)",
                    ],
                },
                Block::Collapsible {
                    title: "Proving Subset Relationships",
                    blocks: vec![
                        Block::Text("To prove A ⊆ B:"),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "Take an arbitrary element x ∈ A",
                                "Show that x must also belong to B",
                                "Conclude A ⊆ B",
                            ],
                        },
                        Block::Text(
                            "To prove A ⊄ B, find a counterexample: an element in A that is not in B.",
                        ),
                    ],
                },
            ],
        },
        // Page 24 - Power Sets
        Page {
            id: 24,
            title: "Power Sets",
            subtitle: Some("The Set of All Subsets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The power set of a set A, denoted P(A) or 2^A, is the set of all subsets of A.",
                ),
                Block::Formula {
                    formula: "P(A) = {S | S ⊆ A}",
                    description: Some("Power set contains every possible subset of A"),
                },
                Block::Example {
                    title: "Power Set Examples",
                    lines: vec![
                        "A = {1, 2}",
                        "Subsets of A: ∅, {1}, {2}, {1, 2}",
                        "P(A) = {∅, {1}, {2}, {1, 2}}",
                        "|A| = 2, |P(A)| = 4 = 2²",
                    ],
                },
                Block::Example {
                    title: "Larger Example",
                    lines: vec![
                        "B = {a, b, c}",
                        "P(B) = {∅, {a}, {b}, {c}, {a,b}, {a,c}, {b,c}, {a,b,c}}",
                        "|B| = 3, |P(B)| = 8 = 2³",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Power Set Properties",
                },
                Block::Collapsible {
                    title: "Key Properties",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "If |A| = n, then |P(A)| = 2ⁿ",
                            "∅ ∈ P(A) for any set A",
                            "A ∈ P(A) for any set A",
                            "If A ⊆ B, then P(A) ⊆ P(B)",
                            "P(∅) = {∅} (not empty!)",
                            "P(A ∪ B) ≠ P(A) ∪ P(B) in general",
                        ],
                    }],
                },
            ],
        },
        // Page 25 - Advanced Power Set Concepts
        Page {
            id: 25,
            title: "Advanced Power Set Concepts",
            subtitle: Some("Deeper Understanding of Power Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Power sets have fascinating properties and applications in mathematics, computer science, and logic.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Systematic Construction",
                },
                Block::Example {
                    title: "Binary Method for Power Set Construction",
                    lines: vec![
                        "For A = {a, b, c}, represent subsets using binary:",
                        "000 → ∅ (no elements selected)",
                        "001 → {c} (only third element)",
                        "010 → {b} (only second element)",
                        "011 → {b, c} (second and third elements)",
                        "100 → {a} (only first element)",
                        "101 → {a, c} (first and third elements)",
                        "110 → {a, b} (first and second elements)",
                        "111 → {a, b, c} (all elements selected)",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Recursive Definition",
                },
                Block::Formula {
                    formula: "P(A ∪ {x}) = P(A) ∪ {S ∪ {x} | S ∈ P(A)}",
                    description: Some(
                        "Power set of A∪{x} includes all subsets of A plus those same subsets with x added",
                    ),
                },
                Block::Collapsible {
                    title: "Applications of Power Sets",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Boolean algebra: Power set forms a Boolean lattice",
                            "Computer science: Representing all possible states or configurations",
                            "Combinatorics: Counting problems and subset selection",
                            "Topology: Collections of open sets",
                            "Logic: Truth assignments to propositional variables",
                        ],
                    }],
                },
            ],
        },
        // Page 26 - Cardinality
        Page {
            id: 26,
            title: "Cardinality",
            subtitle: Some("Measuring the Size of Sets"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Definition(
                    "The cardinality of a set A, denoted |A| or #A, is the number of elements in the set.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Finite Cardinality",
                },
                Block::Example {
                    title: "Finite Set Cardinalities",
                    lines: vec![
                        "|∅| = 0 (empty set has zero elements)",
                        "|{a}| = 1 (singleton has one element)",
                        "|{red, blue, green}| = 3",
                        "|{x | x² = 4}| = |{-2, 2}| = 2",
                        "|P({a, b})| = |{∅, {a}, {b}, {a,b}}| = 4",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Cardinality Rules",
                },
                Block::Table {
                    headers: vec!["Operation", "Cardinality Rule", "Note"],
                    rows: vec![
                        vec![
                            "Union",
                            "|A ∪ B| = |A| + |B| - |A ∩ B|",
                            "Inclusion-Exclusion Principle",
                        ],
                        vec![
                            "Intersection",
                            "|A ∩ B| ≤ min(|A|, |B|)",
                            "Cannot exceed smaller set",
                        ],
                        vec![
                            "Difference",
                            "|A - B| = |A| - |A ∩ B|",
                            "Remove common elements",
                        ],
                        vec![
                            "Cartesian Product",
                            "|A × B| = |A| × |B|",
                            "Multiplicative principle",
                        ],
                        vec!["Power Set", "|P(A)| = 2^|A|", "Exponential growth"],
                    ],
                },
                Block::Example {
                    title: "Inclusion-Exclusion Example",
                    lines: vec![
                        "A = {1, 2, 3, 4}, B = {3, 4, 5, 6}",
                        "|A| = 4, |B| = 4, |A ∩ B| = |{3, 4}| = 2",
                        "|A ∪ B| = 4 + 4 - 2 = 6",
                        "Verify: A ∪ B = {1, 2, 3, 4, 5, 6}, so |A ∪ B| = 6 ✓",
                    ],
                },
            ],
        },
        // Page 27 - Infinite Cardinalities
        Page {
            id: 27,
            title: "Infinite Cardinalities",
            subtitle: Some("Comparing Different Types of Infinity"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Text(
                    "Not all infinite sets are the same size. There are different levels of infinity, discovered by Georg Cantor in the late 19th century.",
                ),
                Block::Heading {
                    level: 3,
                    text: "Countable Infinity",
                },
                Block::Definition(
                    "A set is countably infinite if it can be put in one-to-one correspondence with the natural numbers ℕ. Its cardinality is denoted ℵ₀ (aleph-null).",
                ),
                Block::Example {
                    title: "Countably Infinite Sets",
                    lines: vec![
                        "ℕ = {1, 2, 3, 4, ...} has cardinality ℵ₀",
                        "ℤ = {..., -2, -1, 0, 1, 2, ...} also has cardinality ℵ₀",
                        "ℚ (rational numbers) has cardinality ℵ₀",
                        "Even the set of all finite sequences of natural numbers is countable!",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Uncountable Infinity",
                },
                Block::Definition(
                    "A set is uncountable if it cannot be put in one-to-one correspondence with ℕ. The cardinality of ℝ is denoted c (for continuum).",
                ),
                Block::Example {
                    title: "Uncountably Infinite Sets",
                    lines: vec![
                        "ℝ (real numbers) has cardinality c = 2^ℵ₀",
                        "Any interval of real numbers, e.g., (0,1), has cardinality c",
                        "P(ℕ) (power set of natural numbers) has cardinality c",
                        "The set of all infinite sequences of 0s and 1s has cardinality c",
                    ],
                },
                Block::Collapsible {
                    title: "Cantor's Diagonal Argument",
                    blocks: vec![
                        Block::Text(
                            "Cantor proved that ℝ is uncountable using the diagonal argument:",
                        ),
                        Block::List {
                            ordered: false,
                            items: vec![
                                "Assume ℝ is countable and can be listed as r₁, r₂, r₃, ...",
                                "Construct a new real number by changing the nth digit of rₙ",
                                "This new number differs from every number in the list",
                                "Contradiction! Therefore ℝ is uncountable",
                            ],
                        },
                    ],
                },
            ],
        },
        // Page 28 - Summary and Review
        Page {
            id: 28,
            title: "Chapter Summary",
            subtitle: Some("Key Concepts and Formulas"),
            kind: PageKind::Content,
            blocks: vec![
                Block::Heading {
                    level: 3,
                    text: "Fundamental Definitions",
                },
                Block::List {
                    ordered: false,
                    items: vec![
                        "Set: A well-defined collection of distinct objects",
                        "Element: An object belonging to a set (a ∈ A)",
                        "Empty set: ∅ = { } (contains no elements)",
                        "Universal set: U (contains all elements under consideration)",
                        "Cardinality: |A| = number of elements in set A",
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Set Operations",
                },
                Block::Table {
                    headers: vec!["Operation", "Symbol", "Definition"],
                    rows: vec![
                        vec!["Union", "A ∪ B", "{x | x ∈ A or x ∈ B}"],
                        vec!["Intersection", "A ∩ B", "{x | x ∈ A and x ∈ B}"],
                        vec!["Difference", "A - B", "{x | x ∈ A and x ∉ B}"],
                        vec!["Complement", "A'", "{x | x ∈ U and x ∉ A}"],
                        vec!["Cartesian Product", "A × B", "{(a,b) | a ∈ A and b ∈ B}"],
                    ],
                },
                Block::Heading {
                    level: 3,
                    text: "Important Relationships",
                },
                Block::List {
                    ordered: false,
                    items: vec![
                        "A = B ⟺ A ⊆ B and B ⊆ A (equal sets)",
                        "A ~ B ⟺ |A| = |B| (equivalent sets)",
                        "A ⊆ B ⟺ ∀x(x ∈ A → x ∈ B) (subset)",
                        "P(A) = {S | S ⊆ A} and |P(A)| = 2^|A| (power set)",
                    ],
                },
                Block::Collapsible {
                    title: "Key Formulas for Problem Solving",
                    blocks: vec![Block::List {
                        ordered: false,
                        items: vec![
                            "Inclusion-Exclusion: |A ∪ B| = |A| + |B| - |A ∩ B|",
                            "De Morgan's Laws: (A ∪ B)' = A' ∩ B', (A ∩ B)' = A' ∪ B'",
                            "Distributive Laws: A ∪ (B ∩ C) = (A ∪ B) ∩ (A ∪ C)",
                            "Complement Laws: A ∪ A' = U, A ∩ A' = ∅",
                            "Power Set Cardinality: |P(A)| = 2^|A|",
                        ],
                    }],
                },
            ],
        },
        // Page 29 - Quiz
        Page {
            id: 29,
            title: "Chapter Quiz",
            subtitle: Some("Test Your Understanding"),
            kind: PageKind::Quiz,
            blocks: Vec::new(),
        },
        // Page 30 - References
        Page {
            id: 30,
            title: "References & Credits",
            subtitle: Some("Sources and Acknowledgments"),
            kind: PageKind::References,
            blocks: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_has_thirty_pages_in_order() {
        let pages = pages();
        assert_eq!(pages.len(), 30);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.id, i + 1);
        }
    }

    #[test]
    fn special_pages_sit_where_expected() {
        let pages = pages();
        assert!(matches!(pages[0].kind, PageKind::Cover));
        assert!(matches!(pages[1].kind, PageKind::Contents));
        assert!(matches!(pages[28].kind, PageKind::Quiz));
        assert!(matches!(pages[29].kind, PageKind::References));
    }

    #[test]
    fn content_pages_carry_blocks() {
        for page in pages() {
            if matches!(page.kind, PageKind::Content) {
                assert!(!page.blocks.is_empty(), "page {} has no blocks", page.id);
            }
        }
    }
}
