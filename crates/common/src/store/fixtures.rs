//! Seed data for the in-memory store
//!
//! Three sample patents (with stored text), their analyses, and citations.

use crate::models::{
    AnalysisStatus, Citation, Contradiction, ExtractedData, ParameterRef, Patent, PatentAnalysis,
    PatentStatus, PrincipleRef, UserFeedback,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

/// Fixture ids are fixed so citations and analyses can reference patents
/// and tests can address records directly.
pub const PATENT_MEDICAL: Uuid = Uuid::from_u128(0x1001);
pub const PATENT_SURGICAL: Uuid = Uuid::from_u128(0x1002);
pub const PATENT_IMAGING: Uuid = Uuid::from_u128(0x1003);

pub const ANALYSIS_MEDICAL: Uuid = Uuid::from_u128(0x2001);
pub const ANALYSIS_SURGICAL: Uuid = Uuid::from_u128(0x2002);
pub const ANALYSIS_IMAGING: Uuid = Uuid::from_u128(0x2003);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn principle(label: &str, id: u8) -> PrincipleRef {
    PrincipleRef {
        label: label.to_string(),
        id: Some(id),
    }
}

/// Build the sample records
pub(crate) fn sample_records() -> (Vec<Patent>, Vec<PatentAnalysis>, Vec<Citation>) {
    let patents = vec![
        Patent {
            id: PATENT_MEDICAL,
            patent_number: "US10123456B2".into(),
            title: "Smart Medical Device for Patient Monitoring".into(),
            abstract_text: "A smart medical device for monitoring patient vital signs with improved accuracy and reduced power consumption.".into(),
            filing_date: Some(date(2019, 5, 12)),
            publication_date: None,
            upload_date: timestamp(2023, 6, 15),
            inventors: vec!["John Smith".into(), "Jane Doe".into()],
            assignee: "MedTech Innovations, Inc.".into(),
            pdf_file: Some("https://cdn.example.com/patents/medical_device_patent.pdf".into()),
            pdf_file_name: Some("medical_device_patent.pdf".into()),
            raw_text: Some(
                "Abstract: A smart medical device for monitoring patient vital signs with improved accuracy and reduced power consumption.\n\n\
                 Background: Patient monitoring devices require continuous operation for extended periods, leading to high power consumption and reduced battery life. Current solutions often sacrifice monitoring accuracy for power efficiency.\n\n\
                 Summary of Invention: The invention provides a smart medical device that implements dynamic power management based on patient condition, allowing for continuous monitoring with significantly reduced power consumption. This is achieved through a combination of specialized sensors and adaptive sampling rates.\n\n\
                 Detailed Description: The device comprises a sensor array, a microcontroller, and a wireless communication module. The sensor array includes temperature, pulse, and blood oxygen sensors. The microcontroller implements an algorithm that adjusts sampling frequency based on detected patient condition..."
                    .into(),
            ),
            is_prior_art: false,
            is_competitor: true,
            status: PatentStatus::Analyzed,
        },
        Patent {
            id: PATENT_SURGICAL,
            patent_number: "US10234567B2".into(),
            title: "Minimally Invasive Surgical Tool with Enhanced Dexterity".into(),
            abstract_text: "A surgical tool designed for minimally invasive procedures with enhanced dexterity and precision while maintaining a compact form factor.".into(),
            filing_date: Some(date(2020, 2, 28)),
            publication_date: None,
            upload_date: timestamp(2023, 7, 10),
            inventors: vec!["Robert Johnson".into(), "Sarah Williams".into()],
            assignee: "Surgical Precision, LLC".into(),
            pdf_file: Some("https://cdn.example.com/patents/surgical_tool_patent.pdf".into()),
            pdf_file_name: Some("surgical_tool_patent.pdf".into()),
            raw_text: Some(
                "Abstract: A surgical tool designed for minimally invasive procedures with enhanced dexterity and precision while maintaining a compact form factor.\n\n\
                 Background: Traditional minimally invasive surgical tools often sacrifice dexterity for size, limiting the range and precision of movements. This constraint makes certain procedures more difficult and potentially increases patient risk.\n\n\
                 Summary of Invention: The invention provides a surgical tool with a novel joint mechanism that provides increased degrees of freedom in a compact design. The tool uses a segmented approach with microactuators to enable complex movements within a small diameter.\n\n\
                 Detailed Description: The surgical tool comprises a handle assembly, a shaft, and an end effector. The shaft includes multiple articulating segments, each controlled by microactuators. The control system uses a combination of direct mechanical linkages and electronic controls..."
                    .into(),
            ),
            is_prior_art: true,
            is_competitor: false,
            status: PatentStatus::Reviewed,
        },
        Patent {
            id: PATENT_IMAGING,
            patent_number: "US10345678B2".into(),
            title: "Advanced Diagnostic Imaging System with Reduced Radiation Exposure".into(),
            abstract_text: "An advanced diagnostic imaging system that provides high-resolution images while significantly reducing patient radiation exposure.".into(),
            filing_date: Some(date(2021, 9, 15)),
            publication_date: None,
            upload_date: timestamp(2023, 8, 5),
            inventors: vec!["Maria Garcia".into(), "David Chen".into()],
            assignee: "Imaging Solutions, Inc.".into(),
            pdf_file: Some("https://cdn.example.com/patents/diagnostic_imaging_patent.pdf".into()),
            pdf_file_name: Some("diagnostic_imaging_patent.pdf".into()),
            raw_text: Some(
                "Abstract: An advanced diagnostic imaging system that provides high-resolution images while significantly reducing patient radiation exposure.\n\n\
                 Background: Conventional imaging systems, particularly those using X-rays, expose patients to ionizing radiation. While efforts have been made to reduce exposure, there often remains a trade-off between image quality and radiation dose.\n\n\
                 Summary of Invention: This invention provides an imaging system that uses a novel detector array and advanced image processing algorithms to reduce the required radiation dose while maintaining or improving image quality.\n\n\
                 Detailed Description: The system includes a radiation source, a specialized detector array, and an image processing unit. The detector array incorporates high-sensitivity elements arranged in a non-uniform pattern. The image processing unit applies machine learning algorithms to enhance image clarity..."
                    .into(),
            ),
            is_prior_art: false,
            is_competitor: false,
            status: PatentStatus::Pending,
        },
    ];

    let analyses = vec![
        PatentAnalysis {
            id: ANALYSIS_MEDICAL,
            patent_id: PATENT_MEDICAL,
            analysis_date: timestamp(2023, 6, 20),
            extracted_data: ExtractedData {
                triz_contradictions: vec![
                    Contradiction {
                        improving: ParameterRef::resolved("Speed", 9),
                        worsening: ParameterRef::resolved("Force", 10),
                        principles: vec![
                            principle("Dynamics", 15),
                            principle("Parameter changes", 35),
                            principle("Taking out", 2),
                        ],
                        matrix_principles: vec![],
                    },
                    Contradiction {
                        improving: ParameterRef::resolved("Strength", 14),
                        worsening: ParameterRef::resolved("Weight of moving object", 1),
                        principles: vec![
                            principle("Cheap short-living objects", 27),
                            principle("Local quality", 3),
                            principle("Dynamics", 15),
                            principle("Composite materials", 40),
                        ],
                        matrix_principles: vec![],
                    },
                ],
                key_problems: vec![
                    "Power consumption vs monitoring accuracy".into(),
                    "Device size vs battery life".into(),
                ],
                innovative_solutions: vec![
                    "Dynamic sampling rate based on patient condition".into(),
                    "Miniaturized sensor array with specialized power management".into(),
                ],
            },
            feedback_date: Some(timestamp(2023, 7, 1)),
            user_feedback: Some(UserFeedback {
                accuracy: 4.5,
                completeness: 4.0,
                suggestions: Some(
                    "Consider adding principles related to periodic action (19) for the power management aspect.".into(),
                ),
            }),
            status: AnalysisStatus::Approved,
        },
        PatentAnalysis {
            id: ANALYSIS_SURGICAL,
            patent_id: PATENT_SURGICAL,
            analysis_date: timestamp(2023, 7, 15),
            extracted_data: ExtractedData {
                triz_contradictions: vec![Contradiction {
                    improving: ParameterRef::resolved("Shape", 12),
                    worsening: ParameterRef::resolved("Volume of moving object", 7),
                    principles: vec![
                        principle("Segmentation", 1),
                        principle("Asymmetry", 4),
                        principle("Nested doll", 7),
                        principle("Parameter changes", 35),
                    ],
                    matrix_principles: vec![],
                }],
                key_problems: vec![
                    "Tool dexterity vs size constraints".into(),
                    "Control precision vs mechanical complexity".into(),
                ],
                innovative_solutions: vec![
                    "Segmented shaft with microactuators".into(),
                    "Novel joint mechanism for increased degrees of freedom".into(),
                ],
            },
            feedback_date: None,
            user_feedback: None,
            status: AnalysisStatus::Pending,
        },
        PatentAnalysis {
            id: ANALYSIS_IMAGING,
            patent_id: PATENT_IMAGING,
            analysis_date: timestamp(2023, 8, 10),
            extracted_data: ExtractedData {
                triz_contradictions: vec![Contradiction {
                    improving: ParameterRef::resolved("Reliability", 27),
                    worsening: ParameterRef::resolved("Object-generated harmful factors", 31),
                    principles: vec![
                        principle("Blessing in disguise", 22),
                        principle("Skipping", 21),
                        principle("Cheap short-living objects", 27),
                        principle("Inert atmosphere", 39),
                    ],
                    matrix_principles: vec![],
                }],
                key_problems: vec![
                    "Image quality vs radiation exposure".into(),
                    "Detection sensitivity vs system cost".into(),
                ],
                innovative_solutions: vec![
                    "Non-uniform detector array pattern".into(),
                    "Machine learning enhanced image processing".into(),
                ],
            },
            feedback_date: None,
            user_feedback: None,
            status: AnalysisStatus::New,
        },
    ];

    let citations = vec![
        Citation {
            id: Uuid::from_u128(0x3001),
            citing_patent_id: PATENT_MEDICAL,
            cited_patent_number: "US9876543B2".into(),
            cited_patent_id: None,
            citation_context: Some(
                "Referenced for its power management techniques in wearable devices".into(),
            ),
            citation_date: Some(date(2019, 4, 10)),
        },
        Citation {
            id: Uuid::from_u128(0x3002),
            citing_patent_id: PATENT_MEDICAL,
            cited_patent_number: "US9765432B1".into(),
            cited_patent_id: None,
            citation_context: Some("Referenced for sensor array configuration".into()),
            citation_date: Some(date(2019, 4, 10)),
        },
        Citation {
            id: Uuid::from_u128(0x3003),
            citing_patent_id: PATENT_SURGICAL,
            cited_patent_number: "US9654321B2".into(),
            cited_patent_id: None,
            citation_context: Some("Referenced for articulating joint mechanisms".into()),
            citation_date: Some(date(2020, 1, 15)),
        },
        Citation {
            id: Uuid::from_u128(0x3004),
            citing_patent_id: PATENT_IMAGING,
            cited_patent_number: "US9543210B2".into(),
            cited_patent_id: None,
            citation_context: Some("Referenced for detector array design".into()),
            citation_date: Some(date(2021, 8, 5)),
        },
    ];

    (patents, analyses, citations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_integrity() {
        let (patents, analyses, citations) = sample_records();
        assert_eq!(patents.len(), 3);
        assert_eq!(analyses.len(), 3);
        assert_eq!(citations.len(), 4);

        // Every analysis and citation points at a seeded patent
        for analysis in &analyses {
            assert!(patents.iter().any(|p| p.id == analysis.patent_id));
        }
        for citation in &citations {
            assert!(patents.iter().any(|p| p.id == citation.citing_patent_id));
        }

        // Seeded patents carry text, the input for re-analysis
        assert!(patents.iter().all(|p| p.raw_text.is_some()));
    }

    #[test]
    fn test_fixture_references_resolve() {
        let reference = crate::triz::TrizReference::builtin();
        let (_, analyses, _) = sample_records();
        for analysis in &analyses {
            for contradiction in &analysis.extracted_data.triz_contradictions {
                let improving = contradiction.improving.id.expect("resolved fixture");
                assert_eq!(
                    reference.resolve_parameter(&contradiction.improving.label),
                    Some(improving)
                );
                for principle in &contradiction.principles {
                    let id = principle.id.expect("resolved fixture");
                    assert_eq!(reference.resolve_principle(&principle.label), Some(id));
                }
            }
        }
    }
}
