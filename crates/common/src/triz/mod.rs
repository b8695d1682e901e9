//! TRIZ reference data
//!
//! Compiled-in tables for the 40 inventive principles, the 39 engineering
//! parameters, and the contradiction matrix, plus lookup and label
//! resolution helpers. The matrix carries the cells the source material
//! defines (rows 1-3 complete, row 4 partial); absent cells are a lookup
//! miss, not an empty suggestion list.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One of the 40 inventive principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// One of the 39 engineering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub id: u8,
    pub name: &'static str,
}

/// A populated cell of the contradiction matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub improving: u8,
    pub worsening: u8,
    pub principles: &'static [u8],
}

const PRINCIPLES: &[(u8, &str, &str, &[&str])] = &[
    (1, "Segmentation", "Divide an object into independent parts", &["Sectional furniture", "Modular computer components", "Sectional sofa"]),
    (2, "Taking out", "Extract the disturbing part or property from an object", &["Noise absorption in a quiet room", "Use of a sound-absorbing ceiling", "Removing seeds from fruits"]),
    (3, "Local quality", "Change an object's structure or environment from uniform to non-uniform", &["Gradient temperature tools", "Composite materials", "Pencil with eraser"]),
    (4, "Asymmetry", "Change the shape from symmetrical to asymmetrical", &["Asymmetric mixing vessels", "Ergonomic handles", "Asymmetric tire tread for better traction"]),
    (5, "Merging", "Bring closer together identical or similar objects", &["Personal computer with multiple functions", "Multi-function printer/scanner/copier", "Swiss Army knife"]),
    (6, "Universality", "Make a part or object perform multiple functions", &["Sofa that converts to a bed", "Child's car safety seat that converts to a stroller", "Multifunction power tools"]),
    (7, "Nested doll", "Place one object inside another", &["Telescoping antenna", "Retractable pen", "Nesting tables or measuring cups"]),
    (8, "Anti-weight", "Compensate for the weight of an object by merging with other objects that provide lift", &["Hydrofoil", "Aircraft wing design", "Helium balloons to support structures"]),
    (9, "Preliminary anti-action", "If an action has both harmful and useful effects, precede it with anti-actions to reduce harm", &["Buffer solution to prevent rapid pH change", "Pre-stressing concrete", "Preheating metal before deformation"]),
    (10, "Preliminary action", "Perform a required change to an object completely or partially before it is needed", &["Pre-pasted wallpaper", "Preheated oven", "Prefabricated housing components"]),
    (11, "Beforehand cushioning", "Prepare emergency means beforehand to compensate for the relatively low reliability of an object", &["Backup parachute", "Reserve tank", "Emergency generator"]),
    (12, "Equipotentiality", "Change the condition of the work in such a way that an object need not be raised or lowered", &["Locks in a canal", "Spring loading", "Self-leveling tables"]),
    (13, "The other way round", "Invert the action used to solve the problem", &["Rotating the part instead of the tool", "Turning a container upside-down to empty it", "Moving platform instead of moving person"]),
    (14, "Spheroidality – Curvature", "Instead of using rectilinear parts, surfaces, or forms, use curvilinear ones", &["Dome structures for strength", "Aerodynamic vehicle shapes", "Curved handles for better grip"]),
    (15, "Dynamics", "Make an object or its environment adjustable for optimal performance at each stage of operation", &["Adjustable steering wheel", "Flexible manufacturing system", "Variable focus lenses"]),
    (16, "Partial or excessive actions", "If 100% of an objective is hard to achieve, use slightly less or slightly more to simplify the problem", &["Overspray when painting, then remove excess", "Fill and then remove excess", "Overscan in television"]),
    (17, "Another dimension", "Move into an additional dimension, from 1D to 2D or from 2D to 3D", &["Multi-story parking or buildings", "3D integrated circuits", "Spiral conveyor"]),
    (18, "Mechanical vibration", "Cause an object to oscillate or vibrate", &["Electric toothbrush", "Vibrating concrete to remove air bubbles", "Ultrasonic cleaning"]),
    (19, "Periodic action", "Instead of continuous action, use periodic or pulsating actions", &["Pulsed welding", "Hammer drill", "Pulse jet engines"]),
    (20, "Continuity of useful action", "Make all parts of an object work at full load all the time", &["Flywheel to maintain energy during non-productive periods", "Continuous operation manufacturing", "Multi-cylinder engines for smooth operation"]),
    (21, "Skipping", "Conduct a process or certain stages at high speed", &["Flash freezing of food", "High-speed cutting to avoid heat damage", "Rapid prototyping technologies"]),
    (22, "Blessing in disguise", "Use harmful factors to achieve a positive effect", &["Friction used for braking", "Waste heat for heating a building", "Recycling harmful waste into useful products"]),
    (23, "Feedback", "Introduce feedback to improve a process or action", &["Thermostat", "Automatic gain control", "Quality control statistical processes"]),
    (24, "Intermediary", "Use an intermediary carrier article or intermediary process", &["Catalyst in chemical reactions", "Remote controls", "Package delivery service"]),
    (25, "Self-service", "Make an object serve itself or organize it to perform auxiliary functions", &["Self-sharpening lawn mower blades", "Halogen lamp that cleans itself", "Self-healing materials"]),
    (26, "Copying", "Instead of an object that is unavailable, expensive, or fragile, use simpler and inexpensive copies", &["Virtual reality", "Acoustic testing using holography", "Flight simulators"]),
    (27, "Cheap short-living objects", "Replace an expensive object with multiple cheap ones, compromising certain qualities", &["Disposable paper cups", "Single-use cameras", "Breakaway components in crash safety"]),
    (28, "Mechanics substitution", "Replace a mechanical means with a sensory means", &["Using optical, acoustic, or thermal measurement instead of mechanical measurement", "Electronic nose to detect chemicals", "Electric fields to detect changes"]),
    (29, "Pneumatics and hydraulics", "Use gas and liquid parts of an object instead of solid parts", &["Hydraulic lifts and presses", "Air cushions in shoes", "Inflatable structures"]),
    (30, "Flexible shells and thin films", "Use flexible shells and thin films instead of three-dimensional structures", &["Inflatable structures", "Heat shrinkable tubing", "Thin film solar cells"]),
    (31, "Porous materials", "Make an object porous or add porous elements", &["Drilling holes in a structure to reduce weight", "Porous pavement for water drainage", "Foam core structures"]),
    (32, "Color changes", "Change the color of an object or its external environment", &["Mood rings", "Chameleon fabrics", "Heat-sensitive inks"]),
    (33, "Homogeneity", "Make objects interact with a given object of the same material", &["Diamond cutting diamond", "Borosilicate glass containers for acids", "Self-healing materials of same composition"]),
    (34, "Discarding and recovering", "Make portions of an object that have fulfilled their functions go away", &["Dissolving medicine capsules", "Biodegradable packaging", "Ablative heat shields"]),
    (35, "Parameter changes", "Change an object's physical state or concentration", &["Freezing water to change its properties", "Liquefying oxygen for storage", "Converting powders to pellets"]),
    (36, "Phase transitions", "Use phenomena occurring during phase transitions", &["Heat pumps using phase transitions", "Freeze drying", "Shape memory alloys"]),
    (37, "Thermal expansion", "Use thermal expansion (or contraction) of materials", &["Thermal fit of parts", "Bimetallic thermostat", "Thermohydraulic engine"]),
    (38, "Strong oxidants", "Replace common air with enriched air or pure oxygen", &["Oxygen breathing for mountain climbers", "Enriched air for metal cutting", "Ozone water treatment"]),
    (39, "Inert atmosphere", "Replace a normal environment with an inert one", &["Argon atmosphere for welding reactive metals", "Nitrogen blanket for flammable liquids", "Vacuum packaging for food"]),
    (40, "Composite materials", "Change from uniform to composite materials", &["Fiberglass", "Carbon fiber composites", "Reinforced concrete"]),
];

const PARAMETERS: &[(u8, &str)] = &[
    (1, "Weight of moving object"),
    (2, "Weight of stationary object"),
    (3, "Length of moving object"),
    (4, "Length of stationary object"),
    (5, "Area of moving object"),
    (6, "Area of stationary object"),
    (7, "Volume of moving object"),
    (8, "Volume of stationary object"),
    (9, "Speed"),
    (10, "Force"),
    (11, "Stress or pressure"),
    (12, "Shape"),
    (13, "Stability of the object's composition"),
    (14, "Strength"),
    (15, "Duration of action of moving object"),
    (16, "Duration of action of stationary object"),
    (17, "Temperature"),
    (18, "Illumination intensity"),
    (19, "Use of energy by moving object"),
    (20, "Use of energy by stationary object"),
    (21, "Power"),
    (22, "Loss of energy"),
    (23, "Loss of substance"),
    (24, "Loss of information"),
    (25, "Loss of time"),
    (26, "Quantity of substance/matter"),
    (27, "Reliability"),
    (28, "Measurement accuracy"),
    (29, "Manufacturing precision"),
    (30, "External harm affects the object"),
    (31, "Object-generated harmful factors"),
    (32, "Ease of manufacture"),
    (33, "Ease of operation"),
    (34, "Ease of repair"),
    (35, "Adaptability or versatility"),
    (36, "Device complexity"),
    (37, "Difficulty of detecting and measuring"),
    (38, "Extent of automation"),
    (39, "Productivity"),
];

const MATRIX: &[(u8, u8, &[u8])] = &[
    (1, 2, &[10, 1, 29, 35]),
    (1, 3, &[29, 17, 38, 34]),
    (1, 4, &[29, 2, 40, 28]),
    (1, 5, &[2, 17, 29, 4]),
    (1, 6, &[2, 29, 40, 4]),
    (1, 7, &[1, 7, 4, 35]),
    (1, 8, &[1, 7, 4, 17]),
    (1, 9, &[2, 28, 13, 38]),
    (1, 10, &[8, 10, 18, 37]),
    (1, 11, &[10, 36, 37, 40]),
    (1, 12, &[5, 35, 14, 2]),
    (1, 13, &[35, 3, 22, 39]),
    (1, 14, &[28, 40, 29, 34]),
    (1, 15, &[19, 5, 34, 31]),
    (1, 16, &[2, 19, 9, 35]),
    (1, 17, &[19, 2, 35, 32]),
    (1, 18, &[19, 32, 35, 2]),
    (1, 19, &[6, 18, 26, 31]),
    (1, 20, &[19, 26, 17, 10]),
    (1, 21, &[35, 6, 18, 31]),
    (1, 22, &[19, 18, 26, 31]),
    (1, 23, &[21, 35, 2, 39]),
    (1, 24, &[26, 39, 1, 40]),
    (1, 25, &[35, 38, 19, 18]),
    (1, 26, &[35, 6, 18, 31]),
    (1, 27, &[27, 3, 26, 18]),
    (1, 28, &[28, 27, 3, 18]),
    (1, 29, &[10, 28, 29, 37]),
    (1, 30, &[10, 28, 23, 18]),
    (1, 31, &[21, 35, 11, 28]),
    (1, 32, &[35, 13, 8, 1]),
    (1, 33, &[2, 27, 28, 11]),
    (1, 34, &[1, 28, 10, 25]),
    (1, 35, &[1, 26, 13, 27]),
    (1, 36, &[26, 27, 13, 1]),
    (1, 37, &[26, 27, 13, 28]),
    (1, 38, &[28, 26, 27, 1]),
    (1, 39, &[35, 26, 24, 37]),
    (2, 1, &[10, 1, 29, 35]),
    (2, 3, &[1, 40, 26, 27]),
    (2, 4, &[26, 27, 1, 39]),
    (2, 5, &[1, 7, 4, 35]),
    (2, 6, &[1, 7, 4, 17]),
    (2, 7, &[1, 7, 4, 35]),
    (2, 8, &[1, 7, 4, 17]),
    (2, 9, &[28, 10, 1, 39]),
    (2, 10, &[15, 10, 26, 35]),
    (2, 11, &[10, 15, 26, 35]),
    (2, 12, &[10, 15, 26, 28]),
    (2, 13, &[3, 35, 10, 40]),
    (2, 14, &[30, 26, 10, 40]),
    (2, 15, &[10, 26, 35, 17]),
    (2, 16, &[10, 35, 17, 4]),
    (2, 17, &[19, 35, 10, 38]),
    (2, 18, &[2, 35, 10, 39]),
    (2, 19, &[28, 19, 32, 22]),
    (2, 20, &[28, 19, 34, 22]),
    (2, 21, &[19, 17, 10, 35]),
    (2, 22, &[35, 19, 10, 38]),
    (2, 23, &[28, 35, 10, 40]),
    (2, 24, &[35, 10, 28, 24]),
    (2, 25, &[35, 10, 2, 18]),
    (2, 26, &[28, 35, 10, 23]),
    (2, 27, &[3, 10, 8, 28]),
    (2, 28, &[10, 28, 35, 23]),
    (2, 29, &[10, 28, 24, 35]),
    (2, 30, &[10, 35, 17, 27]),
    (2, 31, &[35, 10, 28, 24]),
    (2, 32, &[10, 35, 13, 19]),
    (2, 33, &[10, 28, 29, 35]),
    (2, 34, &[2, 10, 27, 35]),
    (2, 35, &[28, 35, 10, 29]),
    (2, 36, &[28, 29, 37, 36]),
    (2, 37, &[26, 28, 10, 34]),
    (2, 38, &[28, 26, 10, 34]),
    (2, 39, &[28, 10, 29, 35]),
    (3, 1, &[29, 17, 38, 34]),
    (3, 2, &[1, 40, 26, 27]),
    (3, 4, &[15, 17, 4]),
    (3, 5, &[17, 10, 4]),
    (3, 6, &[17, 2, 18, 39]),
    (3, 7, &[17, 10, 4]),
    (3, 8, &[17, 10, 4, 30]),
    (3, 9, &[13, 4, 8]),
    (3, 10, &[8, 1, 37, 18]),
    (3, 11, &[10, 15, 19]),
    (3, 12, &[5, 34, 4, 10]),
    (3, 13, &[35, 28, 31, 40]),
    (3, 14, &[1, 8, 10, 29]),
    (3, 15, &[14, 15, 1, 16]),
    (3, 16, &[1, 19, 26, 17]),
    (3, 17, &[15, 19, 35, 38]),
    (3, 18, &[35, 10, 19, 14]),
    (3, 19, &[35, 8, 2, 14]),
    (3, 20, &[17, 19, 10]),
    (3, 21, &[10, 35, 19, 14]),
    (3, 22, &[7, 2, 6, 35]),
    (3, 23, &[4, 6, 2]),
    (3, 24, &[10, 35, 19, 14]),
    (3, 25, &[10, 28, 32]),
    (3, 26, &[1, 15, 17, 24]),
    (3, 27, &[11, 2, 13, 39]),
    (3, 28, &[28, 32, 1, 24]),
    (3, 29, &[32, 28, 3, 1]),
    (3, 30, &[2, 32, 13, 10]),
    (3, 31, &[21, 35, 11, 28]),
    (3, 32, &[35, 1, 16, 11]),
    (3, 33, &[1, 32, 17, 25]),
    (3, 34, &[11, 1, 2, 9]),
    (3, 35, &[17, 15, 16, 22]),
    (3, 36, &[17, 24, 26, 16]),
    (3, 37, &[14, 4, 15, 22]),
    (3, 38, &[2, 18, 17, 15]),
    (3, 39, &[17, 24, 26, 16]),
    (4, 1, &[29, 2, 40, 28]),
    (4, 2, &[26, 27, 1, 39]),
    (4, 3, &[15, 17, 4]),
];

/// Indexed view over the reference tables
#[derive(Debug, Clone)]
pub struct TrizReference {
    principles: Vec<Principle>,
    parameters: Vec<Parameter>,
    matrix: BTreeMap<(u8, u8), &'static [u8]>,
    parameter_names: HashMap<String, u8>,
    principle_names: HashMap<String, u8>,
}

impl TrizReference {
    /// Build the reference from the compiled-in tables
    pub fn builtin() -> Self {
        let principles: Vec<Principle> = PRINCIPLES
            .iter()
            .map(|&(id, name, description, examples)| Principle {
                id,
                name,
                description,
                examples,
            })
            .collect();

        let parameters: Vec<Parameter> = PARAMETERS
            .iter()
            .map(|&(id, name)| Parameter { id, name })
            .collect();

        let matrix: BTreeMap<(u8, u8), &'static [u8]> = MATRIX
            .iter()
            .map(|&(improving, worsening, principles)| ((improving, worsening), principles))
            .collect();

        let parameter_names = parameters
            .iter()
            .map(|p| (p.name.to_lowercase(), p.id))
            .collect();

        let principle_names = principles
            .iter()
            .map(|p| (p.name.to_lowercase(), p.id))
            .collect();

        Self {
            principles,
            parameters,
            matrix,
            parameter_names,
            principle_names,
        }
    }

    /// All principles, ordered by id
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    /// All parameters, ordered by id
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Look up a principle by id (1-40)
    pub fn principle(&self, id: u8) -> Option<&Principle> {
        self.principles.iter().find(|p| p.id == id)
    }

    /// Look up a parameter by id (1-39)
    pub fn parameter(&self, id: u8) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    /// All populated matrix cells, ordered by (improving, worsening)
    pub fn matrix_cells(&self) -> Vec<MatrixCell> {
        self.matrix
            .iter()
            .map(|(&(improving, worsening), &principles)| MatrixCell {
                improving,
                worsening,
                principles,
            })
            .collect()
    }

    /// Principles suggested for an (improving, worsening) parameter pair
    pub fn lookup(&self, improving: u8, worsening: u8) -> Option<&'static [u8]> {
        self.matrix.get(&(improving, worsening)).copied()
    }

    /// Resolve a parameter label to its id. Accepts the canonical name
    /// (case-insensitive) or a numeric string in range.
    pub fn resolve_parameter(&self, label: &str) -> Option<u8> {
        let label = label.trim();
        if let Ok(id) = label.parse::<u8>() {
            return self.parameter(id).map(|p| p.id);
        }
        self.parameter_names.get(&label.to_lowercase()).copied()
    }

    /// Resolve a principle label to its id. Accepts the canonical name
    /// (case-insensitive) or a numeric string in range.
    pub fn resolve_principle(&self, label: &str) -> Option<u8> {
        let label = label.trim();
        if let Ok(id) = label.parse::<u8>() {
            return self.principle(id).map(|p| p.id);
        }
        self.principle_names.get(&label.to_lowercase()).copied()
    }
}
