use educustom_core::models::plan::GeneratedPlan;
use educustom_core::models::request::{Institution, PlanRequest};
use educustom_core::models::settings::TeacherSettings;
use educustom_core::render::render;
use educustom_export::filename::pdf_file_name;
use educustom_export::html::blocks_to_html;
use educustom_export::render::render_document;
use educustom_export::styles::DocumentStyles;
use uuid::Uuid;

fn sample_plan() -> GeneratedPlan {
    GeneratedPlan {
        id: Uuid::new_v4(),
        title: "RPP Sekolah **Fotosintesis**".to_string(),
        content: "# Fotosintesis Lewat Lensa Bola\n\n## Tujuan Pembelajaran\n* Murid memahami **klorofil**\n1. Pembuka\n2. Inti".to_string(),
        topic: "Fotosintesis".to_string(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn sample_request(institution: Institution) -> PlanRequest {
    PlanRequest {
        curriculum_topic: "Fotosintesis".to_string(),
        target_grade: "SMP (Kelas 7-9)".to_string(),
        student_interests: vec!["Sepak Bola".to_string()],
        institution,
    }
}

#[test]
fn body_layout_follows_block_order() {
    let html = blocks_to_html(&render("# Judul\n\n* poin\nteks"));
    let h1 = html.find("<h1>").expect("h1");
    let spacer = html.find("<div class=\"spacer\">").expect("spacer");
    let bullet = html.find("<p class=\"bullet\">").expect("bullet");
    let para = html.rfind("<p>").expect("paragraph");
    assert!(h1 < spacer && spacer < bullet && bullet < para);
}

#[test]
fn body_text_is_html_escaped() {
    let html = blocks_to_html(&render("a <b> & \"c\""));
    assert!(html.contains("a &lt;b&gt; &amp; &quot;c&quot;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn bold_spans_become_strong_elements() {
    let html = blocks_to_html(&render("kata **penting** lagi"));
    assert!(html.contains("kata <strong>penting</strong> lagi"));
}

#[test]
fn numbered_runs_restart_after_other_blocks() {
    let html = blocks_to_html(&render("1. a\n2. b\nantara\n1. c"));
    assert!(html.contains(">1. a"));
    assert!(html.contains(">2. b"));
    assert!(html.contains(">1. c"));
    assert!(!html.contains(">3. c"));
}

#[test]
fn document_carries_identity_and_metadata() {
    let settings = TeacherSettings {
        name: "Budi Santoso, S.Pd.".to_string(),
        school: "SMP Negeri 1 Jakarta".to_string(),
        nip: "19850101 201001 1 001".to_string(),
        city: "Jakarta".to_string(),
        headmaster_name: "Dra. Siti Rahma".to_string(),
        headmaster_nip: "19700202 199501 2 002".to_string(),
    };
    let html = render_document(
        &sample_plan(),
        &settings,
        &sample_request(Institution::Sekolah),
        &DocumentStyles::default(),
    )
    .expect("render");

    assert!(html.contains("SMP Negeri 1 Jakarta"));
    assert!(html.contains("Budi Santoso, S.Pd."));
    assert!(html.contains("Dra. Siti Rahma"));
    assert!(html.contains("Berbasis Kurikulum Nasional"));
    assert!(html.contains("1 Januari 1970"));
    assert!(html.contains("Kepala Sekolah"));
}

#[test]
fn madrasah_documents_cite_kma() {
    let html = render_document(
        &sample_plan(),
        &TeacherSettings::default(),
        &sample_request(Institution::Madrasah),
        &DocumentStyles::default(),
    )
    .expect("render");
    assert!(html.contains("Berbasis KMA 1503/2025"));
    assert!(html.contains("Kepala Madrasah"));
}

#[test]
fn empty_headmaster_fields_fall_back_to_placeholders() {
    let html = render_document(
        &sample_plan(),
        &TeacherSettings::default(),
        &sample_request(Institution::Sekolah),
        &DocumentStyles::default(),
    )
    .expect("render");
    assert!(html.contains("( ............................................ )"));
}

#[test]
fn document_title_is_stripped_of_markers() {
    let html = render_document(
        &sample_plan(),
        &TeacherSettings::default(),
        &sample_request(Institution::Sekolah),
        &DocumentStyles::default(),
    )
    .expect("render");
    assert!(html.contains("<title>RPP Sekolah Fotosintesis</title>"));
}

#[test]
fn pdf_file_name_follows_the_convention() {
    let name = pdf_file_name(
        Institution::Sekolah,
        "Fotosintesis pada Daun",
        jiff::Timestamp::UNIX_EPOCH,
    );
    assert_eq!(name, "RPP_Sekolah_Fotosintesis_pada_Daun_0.pdf");
}
