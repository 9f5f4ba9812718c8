//! Builtin descriptive dataset for the seven assessment steps.
//!
//! This mirrors the static content the front end ships for each selectable
//! option. Coverage is intentionally uneven: the wizard is expected to fall
//! back gracefully for any option not listed here.

use assess_core::model::Step;

use crate::source::{InMemoryProfiles, OptionProfile};

pub(crate) fn builtin_profiles() -> InMemoryProfiles {
    let mut profiles = InMemoryProfiles::new();
    mbti(&mut profiles);
    intelligence(&mut profiles);
    big_five(&mut profiles);
    riasec(&mut profiles);
    decision(&mut profiles);
    life(&mut profiles);
    vark(&mut profiles);
    profiles
}

fn mbti(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Mbti,
        "INTJ",
        OptionProfile::new(
            "Architect",
            "Imaginative and strategic thinkers with a plan for everything.",
        )
        .with_strengths("Independent analysis, long-range planning, high standards")
        .with_challenges("Impatience with inefficiency, reluctance to delegate")
        .with_careers("Systems architecture, research, strategy consulting")
        .with_traits(vec!["strategic", "independent", "decisive"]),
    );
    profiles.insert(
        Step::Mbti,
        "INTP",
        OptionProfile::new(
            "Logician",
            "Inventive thinkers with an unquenchable thirst for knowledge.",
        )
        .with_strengths("Abstract reasoning, originality, objectivity")
        .with_challenges("Follow-through on routine work, deadlines")
        .with_careers("Software design, mathematics, analysis"),
    );
    profiles.insert(
        Step::Mbti,
        "ENTJ",
        OptionProfile::new(
            "Commander",
            "Bold, imaginative leaders who always find a way forward.",
        )
        .with_strengths("Organization, confident decision-making, drive")
        .with_challenges("Impatience, dominance in group settings")
        .with_careers("Management, entrepreneurship, operations")
        .with_traits(vec!["assertive", "efficient", "goal-oriented"]),
    );
    profiles.insert(
        Step::Mbti,
        "ENFP",
        OptionProfile::new(
            "Campaigner",
            "Enthusiastic, creative free spirits who find reasons to smile.",
        )
        .with_strengths("Communication, idea generation, empathy")
        .with_challenges("Sustained focus, administrative detail")
        .with_careers("Marketing, teaching, product design"),
    );
    profiles.insert(
        Step::Mbti,
        "INFJ",
        OptionProfile::new(
            "Advocate",
            "Quiet visionaries driven by firmly held values.",
        )
        .with_strengths("Insight into people, principled persistence")
        .with_challenges("Perfectionism, burnout from overcommitment")
        .with_careers("Counseling, writing, social impact work"),
    );
    profiles.insert(
        Step::Mbti,
        "ISTJ",
        OptionProfile::new(
            "Logistician",
            "Practical, fact-minded people whose reliability cannot be doubted.",
        )
        .with_strengths("Thoroughness, responsibility, calm under pressure")
        .with_challenges("Adapting to sudden change, expressing feelings")
        .with_careers("Accounting, administration, quality assurance"),
    );
    profiles.insert(
        Step::Mbti,
        "ESFJ",
        OptionProfile::new(
            "Consul",
            "Caring, social people eager to help and to belong.",
        )
        .with_strengths("Team care, organization, loyalty")
        .with_challenges("Handling criticism, saying no")
        .with_careers("Healthcare, hospitality, human resources"),
    );
    profiles.insert(
        Step::Mbti,
        "ESTP",
        OptionProfile::new(
            "Entrepreneur",
            "Energetic people who truly enjoy living on the edge.",
        )
        .with_strengths("Quick action, negotiation, risk tolerance")
        .with_challenges("Long-term planning, routine")
        .with_careers("Sales, emergency services, business development"),
    );
}

fn intelligence(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Intelligence,
        "logical",
        OptionProfile::new(
            "Logical-Mathematical Intelligence",
            "Reasons with numbers, patterns and cause-and-effect chains.",
        )
        .with_strengths("Problem decomposition, quantitative analysis")
        .with_careers("Engineering, data science, finance"),
    );
    profiles.insert(
        Step::Intelligence,
        "linguistic",
        OptionProfile::new(
            "Linguistic Intelligence",
            "Thinks in words and uses language precisely and persuasively.",
        )
        .with_strengths("Writing, argumentation, languages")
        .with_careers("Journalism, law, communications"),
    );
    profiles.insert(
        Step::Intelligence,
        "spatial",
        OptionProfile::new(
            "Spatial Intelligence",
            "Visualizes objects and spaces accurately in the mind's eye.",
        )
        .with_careers("Architecture, design, surgery"),
    );
    profiles.insert(
        Step::Intelligence,
        "musical",
        OptionProfile::new(
            "Musical Intelligence",
            "Perceives rhythm, pitch and tone with unusual sensitivity.",
        )
        .with_careers("Music production, sound engineering, composition"),
    );
    profiles.insert(
        Step::Intelligence,
        "kinesthetic",
        OptionProfile::new(
            "Bodily-Kinesthetic Intelligence",
            "Learns and expresses through movement and physical skill.",
        )
        .with_careers("Physiotherapy, athletics, craftsmanship"),
    );
    profiles.insert(
        Step::Intelligence,
        "interpersonal",
        OptionProfile::new(
            "Interpersonal Intelligence",
            "Reads moods, motivations and intentions of others accurately.",
        )
        .with_strengths("Mediation, leadership, collaboration")
        .with_careers("Management, teaching, counseling"),
    );
    profiles.insert(
        Step::Intelligence,
        "intrapersonal",
        OptionProfile::new(
            "Intrapersonal Intelligence",
            "Understands own goals, moods and motivations deeply.",
        )
        .with_careers("Research, writing, psychology"),
    );
    profiles.insert(
        Step::Intelligence,
        "naturalistic",
        OptionProfile::new(
            "Naturalistic Intelligence",
            "Recognizes and classifies patterns in the natural world.",
        )
        .with_careers("Environmental science, agriculture, biology"),
    );
}

fn big_five(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::BigFive,
        "openness",
        OptionProfile::new(
            "High Openness",
            "Curious, imaginative and drawn to new ideas and experiences.",
        )
        .with_strengths("Creativity, learning agility")
        .with_challenges("Boredom with routine")
        .with_careers("Research, design, innovation roles"),
    );
    profiles.insert(
        Step::BigFive,
        "conscientiousness",
        OptionProfile::new(
            "High Conscientiousness",
            "Organized, dependable and disciplined toward goals.",
        )
        .with_strengths("Reliability, planning, persistence")
        .with_careers("Project management, operations, auditing"),
    );
    profiles.insert(
        Step::BigFive,
        "extraversion",
        OptionProfile::new(
            "High Extraversion",
            "Energized by people, action and outward engagement.",
        )
        .with_careers("Sales, public relations, event management"),
    );
    profiles.insert(
        Step::BigFive,
        "agreeableness",
        OptionProfile::new(
            "High Agreeableness",
            "Cooperative, trusting and considerate of others.",
        )
        .with_careers("Healthcare, social work, customer success"),
    );
    profiles.insert(
        Step::BigFive,
        "neuroticism",
        OptionProfile::new(
            "High Sensitivity",
            "Emotionally responsive and alert to risks and problems.",
        )
        .with_strengths("Risk awareness, empathy")
        .with_challenges("Stress management under pressure"),
    );
}

fn riasec(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Riasec,
        "realistic",
        OptionProfile::new(
            "Realistic (Doer)",
            "Prefers hands-on work with tools, machines and tangible results.",
        )
        .with_careers("Engineering trades, agriculture, logistics"),
    );
    profiles.insert(
        Step::Riasec,
        "investigative",
        OptionProfile::new(
            "Investigative (Thinker)",
            "Prefers observing, analyzing and solving abstract problems.",
        )
        .with_strengths("Research method, independent inquiry")
        .with_careers("Science, data analysis, medicine"),
    );
    profiles.insert(
        Step::Riasec,
        "artistic",
        OptionProfile::new(
            "Artistic (Creator)",
            "Prefers unstructured situations that reward original expression.",
        )
        .with_careers("Design, media, writing"),
    );
    profiles.insert(
        Step::Riasec,
        "social",
        OptionProfile::new(
            "Social (Helper)",
            "Prefers working with and for people: informing, training, curing.",
        )
        .with_careers("Teaching, nursing, community work"),
    );
    profiles.insert(
        Step::Riasec,
        "enterprising",
        OptionProfile::new(
            "Enterprising (Persuader)",
            "Prefers leading, persuading and taking business risks.",
        )
        .with_careers("Entrepreneurship, sales leadership, law"),
    );
    profiles.insert(
        Step::Riasec,
        "conventional",
        OptionProfile::new(
            "Conventional (Organizer)",
            "Prefers ordered, rule-based work with data and detail.",
        )
        .with_careers("Accounting, administration, compliance"),
    );
}

fn decision(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Decision,
        "analytical",
        OptionProfile::new(
            "Analytical Decision Maker",
            "Gathers complete information and weighs options methodically.",
        )
        .with_strengths("Rigor, foresight")
        .with_challenges("Deciding under time pressure"),
    );
    profiles.insert(
        Step::Decision,
        "intuitive",
        OptionProfile::new(
            "Intuitive Decision Maker",
            "Trusts pattern recognition and experience to move quickly.",
        )
        .with_challenges("Justifying choices to analytical colleagues"),
    );
    profiles.insert(
        Step::Decision,
        "directive",
        OptionProfile::new(
            "Directive Decision Maker",
            "Values speed, clarity and practical results over deliberation.",
        ),
    );
    profiles.insert(
        Step::Decision,
        "conceptual",
        OptionProfile::new(
            "Conceptual Decision Maker",
            "Explores many creative options with a long-term lens.",
        ),
    );
    profiles.insert(
        Step::Decision,
        "behavioral",
        OptionProfile::new(
            "Behavioral Decision Maker",
            "Decides through consultation and attention to how people are affected.",
        ),
    );
}

fn life(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Life,
        "student",
        OptionProfile::new(
            "Student",
            "Currently studying, with time to build foundations before committing.",
        )
        .with_study_tips(vec!["Build a portfolio early", "Intern before graduating"]),
    );
    profiles.insert(
        Step::Life,
        "early_career",
        OptionProfile::new(
            "Early Career",
            "In the first years of work, optimizing for learning and direction.",
        ),
    );
    profiles.insert(
        Step::Life,
        "career_change",
        OptionProfile::new(
            "Career Change",
            "Transitioning between fields and transferring existing strengths.",
        )
        .with_challenges("Re-credentialing, starting below previous seniority"),
    );
    profiles.insert(
        Step::Life,
        "entrepreneur",
        OptionProfile::new(
            "Entrepreneur",
            "Building something of their own and trading stability for ownership.",
        )
        .with_strengths("Initiative, tolerance for ambiguity"),
    );
}

fn vark(profiles: &mut InMemoryProfiles) {
    profiles.insert(
        Step::Vark,
        "visual",
        OptionProfile::new(
            "Visual Learner",
            "Learns best from diagrams, charts and spatial arrangement of ideas.",
        )
        .with_learning_methods(vec!["diagrams", "mind maps", "color coding"])
        .with_study_tips(vec!["Sketch concepts", "Use flowcharts for processes"])
        .with_work_environment("Whiteboard-heavy, visually organized spaces"),
    );
    profiles.insert(
        Step::Vark,
        "auditory",
        OptionProfile::new(
            "Auditory Learner",
            "Learns best by listening, discussing and explaining aloud.",
        )
        .with_learning_methods(vec!["lectures", "discussion groups", "recordings"])
        .with_study_tips("Teach the material to someone else out loud."),
    );
    profiles.insert(
        Step::Vark,
        "reading",
        OptionProfile::new(
            "Reading/Writing Learner",
            "Learns best through text: reading deeply and rewriting notes.",
        )
        .with_learning_methods(vec!["textbooks", "note rewriting", "lists"]),
    );
    profiles.insert(
        Step::Vark,
        "kinesthetic",
        OptionProfile::new(
            "Kinesthetic Learner",
            "Learns best by doing: practice, simulation and trial-and-error.",
        )
        .with_learning_methods(vec!["labs", "role play", "hands-on projects"])
        .with_work_environment("Workshops and field settings over desks"),
    );
}
