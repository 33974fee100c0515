//! Natural-language instruction sent to the generation service.

use crate::models::FormData;

/// Build the generation prompt for a form.
///
/// Pure and deterministic: the same form always yields the same bytes.
///
/// ```rust
/// use rpm_core::{models::FormData, prompt::build_prompt};
///
/// let form = FormData::default();
/// let prompt = build_prompt(&form);
/// assert!(prompt.contains("Pertemuan 1: Inkuiri"));
/// assert_eq!(prompt, build_prompt(&form));
/// ```
pub fn build_prompt(form: &FormData) -> String {
    let practices = practices_text(form);
    let dimensions = form
        .graduate_dimensions
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "
Anda adalah seorang ahli perancang kurikulum dan guru ahli di Indonesia yang berspesialisasi dalam membuat Rencana Pembelajaran Mendalam (RPM) yang terperinci berdasarkan kerangka Kurikulum Merdeka.

Tugas Anda adalah membuat RPM yang komprehensif berdasarkan data berikut:
- Nama Satuan Pendidikan: {school}
- Nama Guru: {teacher}
- NIP Guru: {teacher_nip}
- Nama Kepala Sekolah: {principal}
- NIP Kepala Sekolah: {principal_nip}
- Jenjang Pendidikan: {level}
- Kelas: {grade}
- Mata Pelajaran: {subject}
- Capaian Pembelajaran (CP): {outcomes}
- Materi Pelajaran: {material}
- Jumlah Pertemuan: {count}
- Durasi Setiap Pertemuan: {duration}
- Praktik Pedagogis per Pertemuan: {practices}
- Dimensi Lulusan yang ditargetkan: {dimensions}

HASIL HARUS DALAM FORMAT JSON YANG SESUAI DENGAN SKEMA YANG DIBERIKAN.
Pastikan konten yang dihasilkan relevan, praktis, dan dapat langsung digunakan oleh guru.
- Buat Tujuan Pembelajaran yang terukur dari Capaian Pembelajaran.
- Buat Pertanyaan Kunci yang memantik rasa ingin tahu siswa.
- Rancang setiap pertemuan dengan detail kegiatan (pembuka, inti, penutup) yang sesuai dengan praktik pedagogis yang dipilih.
- Buat tepat {count} entri pengalaman belajar, satu untuk setiap pertemuan, berurutan mulai dari pertemuan 1.
- Tentukan asesmen formatif dan sumatif yang relevan untuk mengukur ketercapaian tujuan.
- Pastikan semua bagian terisi dengan informasi yang berkualitas dan mendalam.
- Untuk materi pelajaran di setiap sesi pengalaman belajar, pecah materi pelajaran utama menjadi sub-topik yang sesuai untuk setiap pertemuan.
",
        school = form.school_name,
        teacher = form.teacher_name,
        teacher_nip = form.teacher_nip,
        principal = form.principal_name,
        principal_nip = form.principal_nip,
        level = form.education_level.as_str(),
        grade = form.grade,
        subject = form.subject,
        outcomes = form.learning_outcomes,
        material = form.learning_material,
        count = form.meeting_count,
        duration = form.meeting_duration,
    )
}

/// `Pertemuan 1: Inkuiri, Pertemuan 2: PjBL, ...`
fn practices_text(form: &FormData) -> String {
    form.pedagogical_practices
        .iter()
        .enumerate()
        .map(|(index, practice)| format!("Pertemuan {}: {}", index + 1, practice.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
