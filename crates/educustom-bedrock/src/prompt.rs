//! System-prompt assembly for lesson-plan generation.
//!
//! The prompt carries the pedagogical persona, the request context, an
//! institution-specific character-integration directive, and the
//! mandatory nine-section output structure the renderer expects.

use educustom_core::models::request::{Institution, PlanRequest};

/// The fixed user turn sent with every generation request.
pub const GENERATION_USER_MESSAGE: &str =
    "Buatkan saya rencana pembelajaran yang komprehensif berdasarkan konteks yang diberikan.";

/// Build the system prompt for one request.
pub fn build_system_prompt(request: &PlanRequest) -> String {
    let is_madrasah = request.institution == Institution::Madrasah;

    let institution_directive = if is_madrasah {
        "KHUSUS MADRASAH: Integrasikan nilai-nilai KMA 1503/2025, termasuk Penguatan \
         Profil Pelajar Pancasila dan Profil Pelajar Rahmatan Lil Alamin (P5RA), serta \
         Moderasi Beragama secara halus namun bermakna dalam kegiatan."
    } else {
        "KHUSUS SEKOLAH UMUM: Fokus pada Penguatan Profil Pelajar Pancasila (P5) dan \
         literasi/numerasi."
    };

    let character_integration = if is_madrasah {
        "P5RA & Moderasi Beragama (Sesuai KMA 1503/2025)"
    } else {
        "Profil Pelajar Pancasila (P5)"
    };

    format!(
        "Anda adalah seorang Kurikulum Designer dan Pedagogical Mentor yang ahli dalam \
         Diferensiasi Pembelajaran (Differentiated Instruction) dan Kurikulum Nasional \
         (Kurikulum Merdeka/K13).\n\
         Tugas Anda adalah membuat Rencana Pelaksanaan Pembelajaran (RPP) atau Modul Ajar \
         yang sangat menarik dan terstruktur.\n\
         \n\
         KONTEKS UTAMA:\n\
         - Instansi: {institution}\n\
         - Materi Pokok: {topic}\n\
         - Jenjang: {grade}\n\
         - Minat/Hobi Murid: {interests}\n\
         \n\
         {institution_directive}\n\
         \n\
         STRUKTUR OUTPUT WAJIB (Gunakan Markdown yang rapi):\n\
         1. **Judul RPP yang Kreatif**: (Hubungkan materi dengan minat murid).\n\
         2. **Tujuan Pembelajaran**: (Gunakan format ABCD: Audience, Behavior, Condition, Degree).\n\
         3. **Indikator Pencapaian Kompetensi (IPK)**: Tuliskan poin-poin konkret yang harus \
         dicapai murid.\n\
         4. **Kegiatan Pembuka (The Hook)**: Bagaimana menghubungkan minat/hobi murid dengan \
         materi secara emosional dan kognitif?\n\
         5. **Kegiatan Inti**: Jelaskan langkah-langkah pembelajaran di mana konsep materi \
         diajarkan melalui analogi, simulasi, atau praktik langsung yang berkaitan dengan hobi \
         tersebut. Pastikan ada diferensiasi proses/produk.\n\
         6. **Kegiatan Penutup (Rinci)**:\n\
         - Refleksi bersama (apa yang dirasakan & dipelajari).\n\
         - Umpan Balik (feedback positif dari guru).\n\
         - Tindak Lanjut (penugasan ringan atau persiapan materi berikutnya).\n\
         7. **Integrasi Karakter**: {character_integration}.\n\
         8. **Asesmen**: Instrumen evaluasi yang relevan (Formatif/Sumatif) dan dikemas sesuai \
         hobi murid.\n\
         9. **Tips untuk Guru**: Cara mengelola kelas agar tetap interaktif.\n\
         \n\
         Bahasa: Profesional, hangat, dan inspiratif. Gunakan Bahasa Indonesia yang baku namun \
         komunikatif.",
        institution = request.institution,
        topic = request.curriculum_topic,
        grade = request.target_grade,
        interests = request.student_interests.join(", "),
    )
}
