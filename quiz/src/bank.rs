//! Built-in question banks.
//!
//! These stand in for a question service that does not exist yet. They are
//! fixed tables so a given quiz always presents the same questions and the
//! same answer key.

#[cfg(test)]
#[path = "bank_test.rs"]
mod bank_test;

use crate::{QuizKind, QuizQuestion, QuizScope};

/// Subjects offered by the exam simulator.
pub const SIMULATOR_SUBJECTS: [(&str, &str); 4] = [
    ("biology", "Biology"),
    ("chemistry", "Chemistry"),
    ("physics", "Physics"),
    ("mathematics", "Mathematics"),
];

type Row = (&'static str, [&'static str; 4], usize, &'static str, Option<&'static str>);

const KNOWLEDGE_CHECK: [Row; 5] = [
    (
        "What is the primary function of mitochondria in a cell?",
        ["Protein synthesis", "Energy production", "Cell division", "Waste removal"],
        1,
        "Mitochondria are often called the powerhouse of the cell because they generate most of the cell's supply of ATP, which is used as a source of chemical energy.",
        None,
    ),
    (
        "Which of the following is a characteristic of living organisms?",
        [
            "Inability to respond to stimuli",
            "Lack of cellular organization",
            "Ability to reproduce",
            "Absence of metabolism",
        ],
        2,
        "All living organisms have the ability to reproduce, which is essential for the continuation of their species.",
        None,
    ),
    (
        "What is the process by which plants make their own food?",
        ["Respiration", "Photosynthesis", "Digestion", "Excretion"],
        1,
        "Photosynthesis is the process by which green plants use sunlight to synthesize foods from carbon dioxide and water.",
        None,
    ),
    (
        "Which of the following is NOT a component of the cell membrane?",
        ["Phospholipids", "Proteins", "Chlorophyll", "Cholesterol"],
        2,
        "Chlorophyll is found in chloroplasts, not in the cell membrane. The cell membrane is composed primarily of phospholipids, proteins, and in animal cells, cholesterol.",
        None,
    ),
    (
        "What is the main function of DNA in a cell?",
        ["Energy storage", "Structural support", "Genetic information storage", "Waste elimination"],
        2,
        "DNA (deoxyribonucleic acid) contains the genetic instructions used in the development and functioning of all known living organisms.",
        None,
    ),
];

const ESLCE_STYLE: [Row; 10] = [
    (
        "In a plant cell, which organelle contains chlorophyll and is responsible for photosynthesis?",
        ["Mitochondria", "Chloroplast", "Golgi apparatus", "Endoplasmic reticulum"],
        1,
        "Chloroplasts are organelles found in plant cells and some protists that conduct photosynthesis. They contain the pigment chlorophyll, which captures light energy for photosynthesis.",
        Some("2018"),
    ),
    (
        "Which of the following statements about enzymes is NOT correct?",
        [
            "Enzymes are biological catalysts",
            "Enzymes are affected by temperature",
            "Enzymes are consumed in the reactions they catalyze",
            "Enzymes are specific to their substrates",
        ],
        2,
        "Enzymes are not consumed in the reactions they catalyze. They remain unchanged at the end of the reaction and can be reused multiple times.",
        Some("2019"),
    ),
    (
        "A student observed that a plant grew toward a light source placed on one side of the plant. This response is an example of:",
        ["Geotropism", "Hydrotropism", "Phototropism", "Thigmotropism"],
        2,
        "Phototropism is the growth or movement of an organism in response to light. Plants typically exhibit positive phototropism, meaning they grow toward light sources.",
        Some("2020"),
    ),
    (
        "Which of the following best describes the process of osmosis?",
        [
            "The movement of water molecules from a region of higher concentration to a region of lower concentration through a selectively permeable membrane",
            "The movement of solute particles from a region of higher concentration to a region of lower concentration",
            "The movement of water molecules from a region of lower concentration to a region of higher concentration",
            "The active transport of molecules against their concentration gradient",
        ],
        0,
        "Osmosis is the movement of water molecules from a region of higher water potential (lower solute concentration) to a region of lower water potential (higher solute concentration) through a selectively permeable membrane.",
        Some("2021"),
    ),
    (
        "In humans, which of the following structures is NOT part of the respiratory system?",
        ["Trachea", "Bronchi", "Pancreas", "Alveoli"],
        2,
        "The pancreas is part of the digestive system and the endocrine system, not the respiratory system. It produces digestive enzymes and hormones like insulin and glucagon.",
        Some("2022"),
    ),
    (
        "Which of the following is a correct statement about DNA replication?",
        [
            "It occurs during prophase of mitosis",
            "It results in two identical DNA molecules",
            "It requires the enzyme lipase",
            "It is a conservative process",
        ],
        1,
        "DNA replication results in two identical DNA molecules, each containing one strand from the original DNA and one newly synthesized strand. This is known as semiconservative replication.",
        Some("2017"),
    ),
    (
        "A food web represents:",
        [
            "The flow of energy in one direction only",
            "A single food chain in an ecosystem",
            "Multiple interconnected food chains in an ecosystem",
            "The relationship between producers only",
        ],
        2,
        "A food web represents multiple interconnected food chains in an ecosystem, showing the complex feeding relationships between different organisms.",
        Some("2019"),
    ),
    (
        "Which of the following is NOT a function of the liver?",
        [
            "Production of bile",
            "Storage of glycogen",
            "Detoxification of harmful substances",
            "Production of insulin",
        ],
        3,
        "The liver does not produce insulin. Insulin is produced by the beta cells of the pancreas. The liver is responsible for bile production, glycogen storage, and detoxification among other functions.",
        Some("2020"),
    ),
    (
        "The process by which mature red blood cells are removed from circulation is called:",
        ["Hemolysis", "Phagocytosis", "Diapedesis", "Erythropoiesis"],
        0,
        "Hemolysis is the process by which red blood cells are broken down at the end of their life cycle (about 120 days). The components are then recycled or eliminated from the body.",
        Some("2021"),
    ),
    (
        "Which of the following is a correct statement about natural selection?",
        [
            "It leads to the development of characteristics that an organism needs",
            "It causes mutations to occur in response to environmental changes",
            "It results in the survival and reproduction of individuals with favorable traits",
            "It ensures that all members of a species adapt to environmental changes",
        ],
        2,
        "Natural selection results in the survival and reproduction of individuals with traits that are favorable in their environment. It does not cause mutations or ensure that all members adapt.",
        Some("2022"),
    ),
];

/// Unit-wide review questions, checked against the whole unit's material.
const UNIT_KNOWLEDGE_CHECK: [Row; 2] = [
    (
        "What is the primary function of mitochondria in a cell?",
        ["Protein synthesis", "Energy production", "Cell division", "Waste removal"],
        1,
        "Mitochondria release energy from food through cellular respiration, producing the ATP the cell runs on.",
        None,
    ),
    (
        "Which of the following is NOT a part of the cell theory?",
        [
            "All living things are composed of cells",
            "Cells are the basic unit of structure and function in living things",
            "All cells arise from pre-existing cells",
            "Cells can transform into different types of organisms",
        ],
        3,
        "Cell theory states that living things are made of cells, cells are the basic unit of life, and cells come from existing cells. It says nothing about cells becoming other organisms.",
        None,
    ),
];

const UNIT_ESLCE_STYLE: [Row; 2] = [
    (
        "A student observed a cell under a microscope and noticed small, rod-shaped structures that appeared to be producing energy for the cell. These structures are most likely:",
        ["Ribosomes", "Mitochondria", "Golgi apparatus", "Lysosomes"],
        1,
        "Rod-shaped organelles that supply the cell with energy are mitochondria. Ribosomes make proteins, the Golgi apparatus packages them, and lysosomes digest waste.",
        None,
    ),
    (
        "Which of the following best describes the process of osmosis?",
        [
            "The movement of water molecules from a region of higher concentration to a region of lower concentration through a selectively permeable membrane",
            "The movement of solute particles from a region of higher concentration to a region of lower concentration",
            "The transport of molecules across a cell membrane using energy",
            "The breakdown of glucose to produce ATP",
        ],
        0,
        "Osmosis is the diffusion of water, not solutes, across a selectively permeable membrane. It needs no energy from the cell.",
        None,
    ),
];

fn materialize(rows: &[Row]) -> Vec<QuizQuestion> {
    rows.iter()
        .map(|(prompt, options, correct, explanation, year)| QuizQuestion {
            prompt: (*prompt).to_owned(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            correct_answer: *correct,
            explanation: (*explanation).to_owned(),
            source_year: year.map(str::to_owned),
        })
        .collect()
}

/// Questions for a quiz of the given kind over a unit or a single topic.
#[must_use]
pub fn questions(kind: QuizKind, scope: QuizScope) -> Vec<QuizQuestion> {
    match (kind, scope) {
        (QuizKind::KnowledgeCheck, QuizScope::Topic) => materialize(&KNOWLEDGE_CHECK),
        (QuizKind::EslceStyle, QuizScope::Topic) => materialize(&ESLCE_STYLE),
        (QuizKind::KnowledgeCheck, QuizScope::Unit) => materialize(&UNIT_KNOWLEDGE_CHECK),
        (QuizKind::EslceStyle, QuizScope::Unit) => materialize(&UNIT_ESLCE_STYLE),
    }
}

/// Display label for a simulator subject key, falling back to the key itself.
#[must_use]
pub fn subject_label(subject: &str) -> &str {
    SIMULATOR_SUBJECTS
        .iter()
        .find(|(key, _)| *key == subject)
        .map_or(subject, |(_, label)| label)
}

/// Generated simulator paper for `subject`.
///
/// The answer key is a fixed function of the question number so repeated
/// attempts are comparable.
#[must_use]
pub fn simulator_questions(subject: &str, count: usize) -> Vec<QuizQuestion> {
    let label = subject_label(subject);
    (1..=count)
        .map(|n| QuizQuestion {
            prompt: format!("This is a sample ESLCE {label} question {n}. What is the correct answer?"),
            options: ["A", "B", "C", "D"]
                .iter()
                .map(|letter| format!("Option {letter} for question {n}"))
                .collect(),
            correct_answer: (n * 3 + 1) % 4,
            explanation: String::new(),
            source_year: None,
        })
        .collect()
}
